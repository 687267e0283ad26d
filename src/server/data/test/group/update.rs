use super::*;

/// Tests updating a group with the current version.
///
/// Expected: Ok with renamed group and incremented version
#[tokio::test]
async fn updates_group_and_increments_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::group::GroupFactory::new(db)
        .name("Rover")
        .build()
        .await?;

    let repo = GroupRepository::new(db);
    let updated = repo
        .update(UpdateGroupParam {
            id: created.id,
            version: 0,
            name: "Rover Crew".to_string(),
        })
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Rover Crew");
    assert_eq!(updated.version, 1);

    Ok(())
}

/// Tests updating a group with an outdated version.
///
/// Verifies that the stale write is rejected and the stored row is untouched.
///
/// Expected: Err(RecordNotUpdated)
#[tokio::test]
async fn rejects_stale_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::group::GroupFactory::new(db)
        .name("Rover")
        .build()
        .await?;

    let repo = GroupRepository::new(db);
    repo.update(UpdateGroupParam {
        id: created.id,
        version: 0,
        name: "First".to_string(),
    })
    .await?;

    let result = repo
        .update(UpdateGroupParam {
            id: created.id,
            version: 0,
            name: "Second".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    let stored = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(stored.name, "First");
    assert_eq!(stored.version, 1);

    Ok(())
}

/// Tests updating a group that does not exist.
///
/// Expected: Err(RecordNotUpdated)
#[tokio::test]
async fn fails_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GroupRepository::new(db)
        .update(UpdateGroupParam {
            id: 999,
            version: 0,
            name: "Ghost".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
