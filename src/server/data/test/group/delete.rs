use super::*;

/// Tests deleting a group.
///
/// Expected: Ok with the group no longer found
#[tokio::test]
async fn deletes_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let repo = GroupRepository::new(db);
    repo.delete(group.id).await?;

    assert!(repo.find_by_id(group.id).await?.is_none());

    Ok(())
}

/// Tests that deleting a group removes its associations but keeps scouts and events.
///
/// Expected: Ok with association rows gone and aggregates intact
#[tokio::test]
async fn deleting_group_clears_associations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    factory::scout::ScoutFactory::new(db)
        .group(group.id)
        .build()
        .await?;
    factory::event::EventFactory::new(db)
        .group(group.id)
        .build()
        .await?;

    GroupRepository::new(db).delete(group.id).await?;

    assert_eq!(entity::prelude::ScoutGroup::find().count(db).await?, 0);
    assert_eq!(entity::prelude::EventGroup::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Scout::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Event::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a group that does not exist.
///
/// Expected: Ok, nothing happens
#[tokio::test]
async fn deleting_missing_group_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    GroupRepository::new(db).delete(42).await?;

    Ok(())
}
