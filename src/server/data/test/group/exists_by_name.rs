use super::*;

/// Tests the exact-name existence check.
///
/// Expected: Ok(true) for the stored name, Ok(false) for anything else
#[tokio::test]
async fn matches_exact_name_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::GroupFactory::new(db)
        .name("Pfadfinder")
        .build()
        .await?;

    let repo = GroupRepository::new(db);

    assert!(repo.exists_by_name("Pfadfinder").await?);
    assert!(!repo.exists_by_name("Pfad").await?);
    assert!(!repo.exists_by_name("Wölflinge").await?);

    Ok(())
}
