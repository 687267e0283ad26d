//! Registration factory for creating test registrations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test registrations with customizable fields.
///
/// The scout and event must already exist.
///
/// # Example
///
/// ```rust,ignore
/// let registration = RegistrationFactory::new(&db, scout.id, event.id)
///     .status("CONFIRMED")
///     .build()
///     .await?;
/// ```
pub struct RegistrationFactory<'a> {
    db: &'a DatabaseConnection,
    scout_id: i32,
    event_id: i32,
    note: String,
    status: String,
    account_id: String,
}

impl<'a> RegistrationFactory<'a> {
    /// Creates a new RegistrationFactory with default values.
    ///
    /// Defaults:
    /// - status: `"PENDING"`
    /// - note: empty
    /// - account_id: `"account-1"`
    pub fn new(db: &'a DatabaseConnection, scout_id: i32, event_id: i32) -> Self {
        Self {
            db,
            scout_id,
            event_id,
            note: String::new(),
            status: "PENDING".to_string(),
            account_id: "account-1".to_string(),
        }
    }

    /// Sets the note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Sets the stored status name.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the account id.
    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = account_id.into();
        self
    }

    /// Builds and inserts the registration with the current time as registration date.
    ///
    /// # Returns
    /// - `Ok(entity::registration::Model)` - Created registration row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::registration::Model, DbErr> {
        entity::registration::ActiveModel {
            id: ActiveValue::NotSet,
            scout_id: ActiveValue::Set(self.scout_id),
            event_id: ActiveValue::Set(self.event_id),
            note: ActiveValue::Set(self.note),
            status: ActiveValue::Set(self.status),
            registration_date: ActiveValue::Set(chrono::Utc::now().naive_utc()),
            account_id: ActiveValue::Set(self.account_id),
            version: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending registration of the scout for the event.
///
/// Shorthand for `RegistrationFactory::new(db, scout_id, event_id).build().await`.
pub async fn create_registration(
    db: &DatabaseConnection,
    scout_id: i32,
    event_id: i32,
) -> Result<entity::registration::Model, DbErr> {
    RegistrationFactory::new(db, scout_id, event_id).build().await
}
