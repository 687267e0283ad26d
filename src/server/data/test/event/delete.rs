use super::*;

/// Tests deleting an event.
///
/// Verifies that group associations and registrations are removed while the groups
/// and scouts survive.
///
/// Expected: Ok with dependent rows gone
#[tokio::test]
async fn deletes_event_and_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let event = factory::event::EventFactory::new(db)
        .group(group.id)
        .build()
        .await?;
    let scout = factory::create_scout(db).await?;
    factory::create_registration(db, scout.id, event.id).await?;

    let repo = EventRepository::new(db);
    repo.delete(event.id).await?;

    assert!(repo.find_by_id(event.id).await?.is_none());
    assert_eq!(entity::prelude::EventGroup::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Registration::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Group::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Scout::find().count(db).await?, 1);

    Ok(())
}
