use super::*;

/// Tests creating an event with participating groups.
///
/// Expected: Ok with the event, its groups ordered by id and version 0
#[tokio::test]
async fn creates_event_with_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_group(db).await?;
    let second = factory::create_group(db).await?;

    let repo = EventRepository::new(db);
    let event = repo
        .create(create_params("Summer Camp", vec![second.id, first.id]))
        .await?;

    assert_eq!(event.version, 0);
    assert_eq!(event.name, "Summer Camp");
    assert_eq!(event.additional_info, "Bring sleeping bag");
    assert_eq!(event.group_ids(), vec![first.id, second.id]);

    let found = repo.find_by_id(event.id).await?;
    assert_eq!(found, Some(event));

    Ok(())
}

/// Tests creating an event open to every group.
///
/// Expected: Ok with no participating groups
#[tokio::test]
async fn creates_open_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let event = repo.create(create_params("Craft Workshop", vec![])).await?;

    assert!(event.participating_groups.is_empty());
    assert_eq!(repo.find_all().await?.len(), 1);

    Ok(())
}
