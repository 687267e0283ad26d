use super::*;

/// Tests listing registrations by event and by scout.
///
/// Expected: Ok with the registrations belonging to each owner
#[tokio::test]
async fn finds_by_event_and_by_scout() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let john = factory::create_scout(db).await?;
    let emma = factory::create_scout(db).await?;
    let camp = factory::create_event(db).await?;
    let hike = factory::create_event(db).await?;

    factory::create_registration(db, john.id, camp.id).await?;
    factory::create_registration(db, emma.id, camp.id).await?;
    factory::create_registration(db, john.id, hike.id).await?;

    let repo = RegistrationRepository::new(db);

    let for_camp = repo.find_by_event_id(camp.id).await?;
    assert_eq!(for_camp.len(), 2);
    assert!(for_camp.iter().all(|r| r.event.id == camp.id));

    let for_john = repo.find_by_scout_id(john.id).await?;
    assert_eq!(for_john.len(), 2);
    assert!(for_john.iter().all(|r| r.scout.id == john.id));

    assert!(repo.find_by_scout_id(999).await?.is_empty());

    Ok(())
}

/// Tests deleting a registration.
///
/// Expected: Ok with the registration gone and scout and event kept
#[tokio::test]
async fn delete_removes_only_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (scout, event, registration) =
        factory::helpers::create_registration_with_dependencies(db).await?;

    let repo = RegistrationRepository::new(db);
    repo.delete(registration.id).await?;

    assert!(repo.find_by_id(registration.id).await?.is_none());
    assert!(repo.find_by_event_id(event.id).await?.is_empty());
    assert!(repo.find_by_scout_id(scout.id).await?.is_empty());

    Ok(())
}
