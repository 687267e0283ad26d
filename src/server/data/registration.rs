use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::{
    data::{event::EventRepository, scout::ScoutRepository},
    model::{
        event::Event,
        registration::{CreateRegistrationParam, Registration, UpdateRegistrationParam},
        scout::Scout,
    },
};

pub struct RegistrationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RegistrationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a registration and returns it with its scout and event loaded.
    ///
    /// # Returns
    /// - `Ok(Registration)` - Created registration with version 0
    /// - `Err(DbErr)` - Database error, including a unique violation when the scout is
    ///   already registered for the event
    pub async fn create(&self, params: CreateRegistrationParam) -> Result<Registration, DbErr> {
        let registration = entity::registration::ActiveModel {
            scout_id: ActiveValue::Set(params.scout_id),
            event_id: ActiveValue::Set(params.event_id),
            note: ActiveValue::Set(params.note),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            registration_date: ActiveValue::Set(params.registration_date),
            account_id: ActiveValue::Set(params.account_id),
            version: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(registration.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Registration with id {} not found after creation",
                registration.id
            )))
    }

    /// Updates note, status and account id if the stored version still matches.
    ///
    /// Scout, event and registration date are never written.
    ///
    /// # Returns
    /// - `Ok(Registration)` - Updated registration carrying the incremented version
    /// - `Err(DbErr::RecordNotUpdated)` - Registration is missing or was modified concurrently
    pub async fn update(&self, params: UpdateRegistrationParam) -> Result<Registration, DbErr> {
        let result = entity::prelude::Registration::update_many()
            .set(entity::registration::ActiveModel {
                note: ActiveValue::Set(params.note),
                status: ActiveValue::Set(params.status.as_str().to_string()),
                account_id: ActiveValue::Set(params.account_id),
                version: ActiveValue::Set(params.version + 1),
                ..Default::default()
            })
            .filter(entity::registration::Column::Id.eq(params.id))
            .filter(entity::registration::Column::Version.eq(params.version))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        self.find_by_id(params.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Registration with id {} not found after update",
                params.id
            )))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Registration::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Registration>, DbErr> {
        let Some(registration) = entity::prelude::Registration::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.load(vec![registration]).await?.pop())
    }

    pub async fn find_by_event_id(&self, event_id: i32) -> Result<Vec<Registration>, DbErr> {
        let registrations = entity::prelude::Registration::find()
            .filter(entity::registration::Column::EventId.eq(event_id))
            .order_by_asc(entity::registration::Column::Id)
            .all(self.db)
            .await?;

        self.load(registrations).await
    }

    pub async fn find_by_scout_id(&self, scout_id: i32) -> Result<Vec<Registration>, DbErr> {
        let registrations = entity::prelude::Registration::find()
            .filter(entity::registration::Column::ScoutId.eq(scout_id))
            .order_by_asc(entity::registration::Column::Id)
            .all(self.db)
            .await?;

        self.load(registrations).await
    }

    pub async fn exists_by_event_and_scout(
        &self,
        event_id: i32,
        scout_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Registration::find()
            .filter(entity::registration::Column::EventId.eq(event_id))
            .filter(entity::registration::Column::ScoutId.eq(scout_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Loads the scout and event aggregates referenced by the given rows.
    ///
    /// Foreign keys guarantee both exist; a missing one means the rows changed
    /// underneath this read and is reported as `DbErr::RecordNotFound`.
    async fn load(
        &self,
        registrations: Vec<entity::registration::Model>,
    ) -> Result<Vec<Registration>, DbErr> {
        if registrations.is_empty() {
            return Ok(Vec::new());
        }

        let mut scout_ids: Vec<i32> = registrations.iter().map(|r| r.scout_id).collect();
        scout_ids.sort_unstable();
        scout_ids.dedup();
        let mut event_ids: Vec<i32> = registrations.iter().map(|r| r.event_id).collect();
        event_ids.sort_unstable();
        event_ids.dedup();

        let scouts: HashMap<i32, Scout> = ScoutRepository::new(self.db)
            .find_by_ids(&scout_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();
        let events: HashMap<i32, Event> = EventRepository::new(self.db)
            .find_by_ids(&event_ids)
            .await?
            .into_iter()
            .map(|e| (e.id, e))
            .collect();

        registrations
            .into_iter()
            .map(|registration| {
                let scout = scouts.get(&registration.scout_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Scout with id {} not found for registration {}",
                        registration.scout_id, registration.id
                    ))
                })?;
                let event = events.get(&registration.event_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Event with id {} not found for registration {}",
                        registration.event_id, registration.id
                    ))
                })?;

                Registration::from_entity(registration, scout, event)
            })
            .collect()
    }
}
