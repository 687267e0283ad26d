use super::*;

/// Tests creating a scout with contacts and groups.
///
/// Verifies that every field round-trips through the three scout tables, contacts keep
/// their order and groups come back ordered by id.
///
/// Expected: Ok with the complete aggregate at version 0
#[tokio::test]
async fn creates_scout_aggregate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scout_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_group(db).await?;
    let second = factory::create_group(db).await?;

    let repo = ScoutRepository::new(db);
    let scout = repo
        .create(create_params(
            "John Doe",
            vec![contact("Mary"), contact("Adam"), contact("Zoe")],
            vec![second.id, first.id],
        ))
        .await?;

    assert_eq!(scout.version, 0);
    assert_eq!(scout.name, "John Doe");
    assert_eq!(scout.allergy_info, "Peanuts");
    let contact_names: Vec<&str> = scout.contacts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(contact_names, vec!["Mary", "Adam", "Zoe"]);
    let group_ids: Vec<i32> = scout.groups.iter().map(|g| g.id).collect();
    assert_eq!(group_ids, vec![first.id, second.id]);

    let found = repo.find_by_id(scout.id).await?;
    assert_eq!(found, Some(scout));

    Ok(())
}

/// Tests that a repeated group id is stored once.
///
/// Expected: Ok with a single group association
#[tokio::test]
async fn ignores_duplicate_group_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scout_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let scout = ScoutRepository::new(db)
        .create(create_params(
            "Emma Smith",
            vec![contact("Lisa")],
            vec![group.id, group.id],
        ))
        .await?;

    assert_eq!(scout.groups.len(), 1);
    assert_eq!(entity::prelude::ScoutGroup::find().count(db).await?, 1);

    Ok(())
}

/// Tests creating a scout that references a missing group.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_scout_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ScoutRepository::new(db)
        .create(create_params("Max", vec![contact("Eva")], vec![404]))
        .await;

    assert!(result.is_err());

    Ok(())
}
