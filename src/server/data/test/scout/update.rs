use super::*;

/// Tests updating a scout's fields, contacts and groups.
///
/// Expected: Ok with replaced children and incremented version
#[tokio::test]
async fn replaces_contacts_and_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scout_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let old_group = factory::create_group(db).await?;
    let new_group = factory::create_group(db).await?;

    let repo = ScoutRepository::new(db);
    let created = repo
        .create(create_params(
            "John Doe",
            vec![contact("Mary"), contact("Adam")],
            vec![old_group.id],
        ))
        .await?;

    let mut params = update_params(
        created.id,
        created.version,
        create_params("John D.", vec![contact("Zoe")], vec![new_group.id]),
    );
    params.address = "Birkenallee 9".to_string();

    let updated = repo.update(params).await?;

    assert_eq!(updated.version, 1);
    assert_eq!(updated.name, "John D.");
    assert_eq!(updated.address, "Birkenallee 9");
    assert_eq!(updated.contacts.len(), 1);
    assert_eq!(updated.contacts[0].name, "Zoe");
    assert_eq!(updated.groups.len(), 1);
    assert_eq!(updated.groups[0].id, new_group.id);
    assert_eq!(entity::prelude::ScoutContact::find().count(db).await?, 1);

    Ok(())
}

/// Tests updating a scout with an outdated version.
///
/// Verifies that neither the row nor its contacts change.
///
/// Expected: Err(RecordNotUpdated)
#[tokio::test]
async fn rejects_stale_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scout_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScoutRepository::new(db);
    let created = repo
        .create(create_params("John Doe", vec![contact("Mary")], vec![]))
        .await?;

    repo.update(update_params(
        created.id,
        0,
        create_params("First", vec![contact("Mary")], vec![]),
    ))
    .await?;

    let result = repo
        .update(update_params(
            created.id,
            0,
            create_params("Second", vec![contact("Other")], vec![]),
        ))
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    let stored = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(stored.name, "First");
    assert_eq!(stored.version, 1);
    assert_eq!(stored.contacts[0].name, "Mary");

    Ok(())
}
