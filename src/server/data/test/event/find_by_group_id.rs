use super::*;

/// Tests finding the events of a group.
///
/// Verifies that only events explicitly listing the group are returned; events open to
/// all groups and events of other groups are not.
///
/// Expected: Ok with exactly the assigned events
#[tokio::test]
async fn returns_only_explicitly_assigned_events() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let scouts = factory::create_group(db).await?;
    let rovers = factory::create_group(db).await?;

    let camp = factory::event::EventFactory::new(db)
        .group(scouts.id)
        .group(rovers.id)
        .build()
        .await?;
    factory::event::EventFactory::new(db)
        .group(rovers.id)
        .build()
        .await?;
    factory::create_event(db).await?;

    let events = EventRepository::new(db).find_by_group_id(scouts.id).await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, camp.id);
    assert_eq!(events[0].participating_groups.len(), 2);

    Ok(())
}

/// Tests finding events for a group without any.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_group_without_events() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    factory::create_event(db).await?;

    let events = EventRepository::new(db).find_by_group_id(group.id).await?;

    assert!(events.is_empty());

    Ok(())
}
