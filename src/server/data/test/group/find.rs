use super::*;

/// Tests fetching a group that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_by_id_returns_none_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(GroupRepository::new(db).find_by_id(7).await?.is_none());

    Ok(())
}

/// Tests that all groups come back ordered by id.
///
/// Expected: Ok with groups in insertion order
#[tokio::test]
async fn find_all_orders_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_group(db).await?;
    let second = factory::create_group(db).await?;

    let groups = GroupRepository::new(db).find_all().await?;
    let ids: Vec<i32> = groups.iter().map(|g| g.id).collect();

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests fetching a subset of groups by id.
///
/// Verifies that unknown ids are skipped and an empty input yields no query results.
///
/// Expected: Ok with the known groups only
#[tokio::test]
async fn find_by_ids_skips_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_group(db).await?;
    factory::create_group(db).await?;
    let third = factory::create_group(db).await?;

    let repo = GroupRepository::new(db);
    let groups = repo.find_by_ids(&[third.id, 999, first.id]).await?;
    let ids: Vec<i32> = groups.iter().map(|g| g.id).collect();

    assert_eq!(ids, vec![first.id, third.id]);
    assert!(repo.find_by_ids(&[]).await?.is_empty());

    Ok(())
}
