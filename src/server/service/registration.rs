use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{
        event::EventRepository, registration::RegistrationRepository, scout::ScoutRepository,
    },
    error::AppError,
    model::registration::{CreateRegistrationParam, Registration, UpdateRegistrationParam},
    service::{event::event_not_found, scout::scout_not_found},
};

pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a scout for an event.
    ///
    /// # Returns
    /// - `Ok(Registration)` - Created registration
    /// - `Err(AppError::NotFound)` - Scout or event does not exist
    /// - `Err(AppError::BadRequest)` - The scout is already registered for the event
    pub async fn create_registration(
        &self,
        params: CreateRegistrationParam,
    ) -> Result<Registration, AppError> {
        let txn = self.db.begin().await?;

        if ScoutRepository::new(&txn)
            .find_by_id(params.scout_id)
            .await?
            .is_none()
        {
            return Err(scout_not_found(params.scout_id));
        }
        if EventRepository::new(&txn)
            .find_by_id(params.event_id)
            .await?
            .is_none()
        {
            return Err(event_not_found(params.event_id));
        }

        let repo = RegistrationRepository::new(&txn);

        if repo
            .exists_by_event_and_scout(params.event_id, params.scout_id)
            .await?
        {
            return Err(already_registered());
        }

        let registration = repo.create(params).await.map_err(map_insert_error)?;

        txn.commit().await?;

        tracing::info!(
            "Registered scout {} for event {}",
            registration.scout.id,
            registration.event.id
        );

        Ok(registration)
    }

    /// Updates note, status and account id of a registration.
    ///
    /// # Returns
    /// - `Ok(Registration)` - Updated registration with incremented version
    /// - `Err(AppError::NotFound)` - Registration does not exist
    /// - `Err(AppError::BadRequest)` - The update names a different scout or event
    /// - `Err(AppError::DbErr(RecordNotUpdated))` - `params.version` is stale
    pub async fn update_registration(
        &self,
        params: UpdateRegistrationParam,
    ) -> Result<Registration, AppError> {
        let txn = self.db.begin().await?;
        let repo = RegistrationRepository::new(&txn);

        let existing = repo
            .find_by_id(params.id)
            .await?
            .ok_or_else(|| registration_not_found(params.id))?;

        if existing.scout.id != params.scout_id {
            return Err(AppError::BadRequest(
                "Cannot change the scout of an existing registration".to_string(),
            ));
        }
        if existing.event.id != params.event_id {
            return Err(AppError::BadRequest(
                "Cannot change the event of an existing registration".to_string(),
            ));
        }

        let registration = repo.update(params).await?;

        txn.commit().await?;

        Ok(registration)
    }

    pub async fn delete_registration(&self, id: i32) -> Result<(), AppError> {
        let repo = RegistrationRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(registration_not_found(id));
        }

        repo.delete(id).await?;

        tracing::info!("Deleted registration {}", id);

        Ok(())
    }

    pub async fn get_registration(&self, id: i32) -> Result<Registration, AppError> {
        RegistrationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| registration_not_found(id))
    }

    pub async fn get_registrations_by_event(
        &self,
        event_id: i32,
    ) -> Result<Vec<Registration>, AppError> {
        if EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .is_none()
        {
            return Err(event_not_found(event_id));
        }

        Ok(RegistrationRepository::new(self.db)
            .find_by_event_id(event_id)
            .await?)
    }

    pub async fn get_registrations_by_scout(
        &self,
        scout_id: i32,
    ) -> Result<Vec<Registration>, AppError> {
        if ScoutRepository::new(self.db)
            .find_by_id(scout_id)
            .await?
            .is_none()
        {
            return Err(scout_not_found(scout_id));
        }

        Ok(RegistrationRepository::new(self.db)
            .find_by_scout_id(scout_id)
            .await?)
    }
}

fn already_registered() -> AppError {
    AppError::BadRequest("Scout is already registered for this event".to_string())
}

/// Maps a violation of the unique `(event_id, scout_id)` index to the duplicate error.
///
/// A concurrent request can insert the same pair after the existence check has passed;
/// the index then rejects the second insert.
pub(super) fn map_insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => already_registered(),
        _ => AppError::DbErr(err),
    }
}

fn registration_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Registration with id {} does not exist", id))
}
