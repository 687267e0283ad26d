use super::*;

/// Tests the exact-name search.
///
/// Expected: Ok with only the scouts whose name matches exactly
#[tokio::test]
async fn find_by_name_matches_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scout_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let john = factory::scout::ScoutFactory::new(db)
        .name("John Doe")
        .build()
        .await?;
    factory::scout::ScoutFactory::new(db)
        .name("John")
        .build()
        .await?;
    factory::scout::ScoutFactory::new(db)
        .name("Emma Smith")
        .build()
        .await?;

    let repo = ScoutRepository::new(db);
    let found = repo.find_by_name("John Doe").await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, john.id);
    assert!(repo.find_by_name("Nobody").await?.is_empty());

    Ok(())
}

/// Tests loading several scouts at once.
///
/// Verifies that each scout receives its own contacts and groups.
///
/// Expected: Ok with every aggregate assembled correctly
#[tokio::test]
async fn find_all_assembles_each_aggregate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scout_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let with_group = factory::scout::ScoutFactory::new(db)
        .group(group.id)
        .build()
        .await?;
    let without_group = factory::create_scout(db).await?;

    let scouts = ScoutRepository::new(db).find_all().await?;

    assert_eq!(scouts.len(), 2);
    assert_eq!(scouts[0].id, with_group.id);
    assert_eq!(scouts[0].groups.len(), 1);
    assert_eq!(scouts[1].id, without_group.id);
    assert!(scouts[1].groups.is_empty());
    assert!(scouts.iter().all(|s| s.contacts.len() == 1));
    assert_ne!(scouts[0].contacts[0].name, scouts[1].contacts[0].name);

    Ok(())
}
