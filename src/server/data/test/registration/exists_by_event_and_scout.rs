use super::*;

/// Tests the duplicate registration check.
///
/// Expected: Ok(true) only for the registered pair
#[tokio::test]
async fn detects_existing_pair_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (scout, event, _) = factory::helpers::create_registration_with_dependencies(db).await?;
    let other_event = factory::create_event(db).await?;

    let repo = RegistrationRepository::new(db);

    assert!(repo.exists_by_event_and_scout(event.id, scout.id).await?);
    assert!(!repo.exists_by_event_and_scout(other_event.id, scout.id).await?);
    assert!(!repo.exists_by_event_and_scout(scout.id + 100, event.id).await?);

    Ok(())
}
