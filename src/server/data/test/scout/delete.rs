use super::*;

/// Tests deleting a scout.
///
/// Verifies that contacts, group associations and registrations are removed with it.
///
/// Expected: Ok with all dependent rows gone
#[tokio::test]
async fn deletes_scout_and_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let scout = factory::scout::ScoutFactory::new(db)
        .group(group.id)
        .build()
        .await?;
    let event = factory::create_event(db).await?;
    factory::create_registration(db, scout.id, event.id).await?;

    let repo = ScoutRepository::new(db);
    repo.delete(scout.id).await?;

    assert!(repo.find_by_id(scout.id).await?.is_none());
    assert_eq!(entity::prelude::ScoutContact::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ScoutGroup::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Registration::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Group::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Event::find().count(db).await?, 1);

    Ok(())
}
