use super::*;

/// Tests updating a registration's status and note.
///
/// Verifies that the registration date is left untouched.
///
/// Expected: Ok with new values and incremented version
#[tokio::test]
async fn updates_status_and_note() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let scout = factory::create_scout(db).await?;
    let event = factory::create_event(db).await?;

    let repo = RegistrationRepository::new(db);
    let created = repo.create(create_params(scout.id, event.id)).await?;

    let updated = repo
        .update(UpdateRegistrationParam {
            id: created.id,
            version: created.version,
            scout_id: scout.id,
            event_id: event.id,
            note: "Arrives a day late".to_string(),
            status: RegistrationStatus::Confirmed,
            account_id: "account-7".to_string(),
        })
        .await?;

    assert_eq!(updated.version, 1);
    assert_eq!(updated.status, RegistrationStatus::Confirmed);
    assert_eq!(updated.note, "Arrives a day late");
    assert_eq!(updated.account_id, "account-7");
    assert_eq!(updated.registration_date, created.registration_date);

    Ok(())
}

/// Tests updating a registration with an outdated version.
///
/// Expected: Err(RecordNotUpdated)
#[tokio::test]
async fn rejects_stale_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let scout = factory::create_scout(db).await?;
    let event = factory::create_event(db).await?;

    let repo = RegistrationRepository::new(db);
    let created = repo.create(create_params(scout.id, event.id)).await?;

    let result = repo
        .update(UpdateRegistrationParam {
            id: created.id,
            version: created.version + 1,
            scout_id: scout.id,
            event_id: event.id,
            note: String::new(),
            status: RegistrationStatus::Cancelled,
            account_id: String::new(),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));
    assert_eq!(
        repo.find_by_id(created.id).await?.unwrap().status,
        RegistrationStatus::Pending
    );

    Ok(())
}
