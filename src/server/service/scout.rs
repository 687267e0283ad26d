use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::scout::ScoutRepository,
    error::AppError,
    model::scout::{Contact, CreateScoutParam, Scout, UpdateScoutParam},
    service::{
        group::ensure_groups_exist,
        validation::{require_not_blank, validate_contacts},
    },
};

pub struct ScoutService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScoutService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a scout with its contacts and group memberships.
    ///
    /// Stamps `last_updated` with today's date. Runs in one transaction.
    ///
    /// # Returns
    /// - `Ok(Scout)` - Created scout
    /// - `Err(AppError::BadRequest)` - A required field is blank or a contact is invalid
    /// - `Err(AppError::NotFound)` - A referenced group does not exist
    pub async fn create_scout(&self, params: CreateScoutParam) -> Result<Scout, AppError> {
        validate(
            &params.name,
            &params.address,
            &params.health_insurance,
            &params.contacts,
        )?;

        let params = CreateScoutParam {
            last_updated: Utc::now().date_naive(),
            ..params
        };

        let txn = self.db.begin().await?;

        ensure_groups_exist(&txn, &params.group_ids).await?;
        let scout = ScoutRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::info!("Created scout {}", scout.id);

        Ok(scout)
    }

    pub async fn get_scout(&self, id: i32) -> Result<Option<Scout>, AppError> {
        Ok(ScoutRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_all_scouts(&self) -> Result<Vec<Scout>, AppError> {
        Ok(ScoutRepository::new(self.db).find_all().await?)
    }

    pub async fn find_scouts_by_name(&self, name: &str) -> Result<Vec<Scout>, AppError> {
        Ok(ScoutRepository::new(self.db).find_by_name(name).await?)
    }

    /// Updates a scout, replacing contacts and group memberships.
    ///
    /// # Returns
    /// - `Ok(Scout)` - Updated scout with incremented version
    /// - `Err(AppError::NotFound)` - Scout or a referenced group does not exist
    /// - `Err(AppError::DbErr(RecordNotUpdated))` - `params.version` is stale
    pub async fn update_scout(&self, params: UpdateScoutParam) -> Result<Scout, AppError> {
        validate(
            &params.name,
            &params.address,
            &params.health_insurance,
            &params.contacts,
        )?;

        let params = UpdateScoutParam {
            last_updated: Utc::now().date_naive(),
            ..params
        };

        let txn = self.db.begin().await?;
        let repo = ScoutRepository::new(&txn);

        if repo.find_by_id(params.id).await?.is_none() {
            return Err(scout_not_found(params.id));
        }

        ensure_groups_exist(&txn, &params.group_ids).await?;
        let scout = repo.update(params).await?;

        txn.commit().await?;

        Ok(scout)
    }

    /// Deletes a scout and, through cascades, its registrations. Missing scouts are ignored.
    pub async fn delete_scout(&self, id: i32) -> Result<(), AppError> {
        ScoutRepository::new(self.db).delete(id).await?;

        tracing::info!("Deleted scout {}", id);

        Ok(())
    }
}

pub(crate) fn scout_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Scout with id {} does not exist", id))
}

fn validate(
    name: &str,
    address: &str,
    health_insurance: &str,
    contacts: &[Contact],
) -> Result<(), AppError> {
    require_not_blank(name, "name")?;
    require_not_blank(address, "address")?;
    require_not_blank(health_insurance, "health_insurance")?;
    validate_contacts(contacts)
}
