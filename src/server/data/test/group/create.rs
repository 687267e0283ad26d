use super::*;

/// Tests creating a group.
///
/// Verifies that the repository assigns an id and starts the version at 0.
///
/// Expected: Ok with created group
#[tokio::test]
async fn creates_group_with_initial_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let group = repo
        .create(CreateGroupParam {
            name: "Wölflinge".to_string(),
        })
        .await?;

    assert!(group.id > 0);
    assert_eq!(group.version, 0);
    assert_eq!(group.name, "Wölflinge");

    let found = repo.find_by_id(group.id).await?;
    assert_eq!(found, Some(group));

    Ok(())
}

/// Tests that each created group is persisted.
///
/// Expected: Ok with one row per create
#[tokio::test]
async fn find_all_grows_with_each_create() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let before = repo.find_all().await?.len();

    for name in ["Wölflinge", "Jungpfadfinder", "Pfadfinder"] {
        repo.create(CreateGroupParam {
            name: name.to_string(),
        })
        .await?;
    }

    assert_eq!(repo.find_all().await?.len(), before + 3);

    Ok(())
}
