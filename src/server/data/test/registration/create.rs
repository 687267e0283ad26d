use super::*;

/// Tests creating a registration.
///
/// Verifies that the returned registration carries the full scout and event.
///
/// Expected: Ok with registration at version 0
#[tokio::test]
async fn creates_registration_with_aggregates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let scout = factory::scout::ScoutFactory::new(db)
        .group(group.id)
        .build()
        .await?;
    let event = factory::event::EventFactory::new(db)
        .group(group.id)
        .build()
        .await?;

    let repo = RegistrationRepository::new(db);
    let registration = repo.create(create_params(scout.id, event.id)).await?;

    assert_eq!(registration.version, 0);
    assert_eq!(registration.status, RegistrationStatus::Pending);
    assert_eq!(registration.note, "Vegetarian");
    assert_eq!(registration.scout.id, scout.id);
    assert_eq!(registration.scout.groups.len(), 1);
    assert_eq!(registration.event.id, event.id);
    assert_eq!(registration.event.participating_groups.len(), 1);
    assert_eq!(
        registration.registration_date,
        create_params(scout.id, event.id).registration_date
    );

    let found = repo.find_by_id(registration.id).await?;
    assert_eq!(found, Some(registration));

    Ok(())
}
