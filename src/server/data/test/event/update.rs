use super::*;

/// Tests updating an event and replacing its groups.
///
/// Expected: Ok with new fields, new group set and incremented version
#[tokio::test]
async fn replaces_groups_and_increments_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let old_group = factory::create_group(db).await?;
    let new_group = factory::create_group(db).await?;

    let repo = EventRepository::new(db);
    let created = repo
        .create(create_params("Hiking Trip", vec![old_group.id]))
        .await?;

    let updated = repo
        .update(UpdateEventParam {
            id: created.id,
            version: created.version,
            name: "Mountain Hike".to_string(),
            start_date: created.start_date,
            end_date: created.end_date,
            meeting_point: "Train Station".to_string(),
            location: created.location.clone(),
            group_ids: vec![new_group.id],
            cost: "30 EUR".to_string(),
            additional_info: String::new(),
        })
        .await?;

    assert_eq!(updated.version, 1);
    assert_eq!(updated.name, "Mountain Hike");
    assert_eq!(updated.meeting_point, "Train Station");
    assert_eq!(updated.group_ids(), vec![new_group.id]);
    assert_eq!(entity::prelude::EventGroup::find().count(db).await?, 1);

    Ok(())
}

/// Tests updating an event with an outdated version.
///
/// Expected: Err(RecordNotUpdated) and groups unchanged
#[tokio::test]
async fn rejects_stale_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let repo = EventRepository::new(db);
    let created = repo
        .create(create_params("Hiking Trip", vec![group.id]))
        .await?;

    let result = repo
        .update(UpdateEventParam::with_groups(
            crate::server::model::event::Event {
                version: 5,
                ..created.clone()
            },
            vec![],
        ))
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    let stored = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(stored, created);

    Ok(())
}
