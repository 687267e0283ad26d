use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{event::EventRepository, group::GroupRepository},
    error::AppError,
    model::event::{CreateEventParam, Event, UpdateEventParam},
    service::{
        group::{ensure_groups_exist, group_not_found},
        validation::require_not_blank,
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event with its participating groups
    pub async fn create_event(&self, params: CreateEventParam) -> Result<Event, AppError> {
        require_not_blank(&params.name, "name")?;
        require_not_blank(&params.location, "location")?;

        let txn = self.db.begin().await?;

        ensure_groups_exist(&txn, &params.group_ids).await?;
        let event = EventRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::info!("Created event {} '{}'", event.id, event.name);

        Ok(event)
    }

    pub async fn get_event(&self, id: i32) -> Result<Option<Event>, AppError> {
        Ok(EventRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_all_events(&self) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db).find_all().await?)
    }

    /// Updates an event, replacing its participating groups.
    ///
    /// # Returns
    /// - `Ok(Event)` - Updated event with incremented version
    /// - `Err(AppError::NotFound)` - Event or a referenced group does not exist
    /// - `Err(AppError::DbErr(RecordNotUpdated))` - `params.version` is stale
    pub async fn update_event(&self, params: UpdateEventParam) -> Result<Event, AppError> {
        require_not_blank(&params.name, "name")?;
        require_not_blank(&params.location, "location")?;

        let txn = self.db.begin().await?;
        let repo = EventRepository::new(&txn);

        if repo.find_by_id(params.id).await?.is_none() {
            return Err(event_not_found(params.id));
        }

        ensure_groups_exist(&txn, &params.group_ids).await?;
        let event = repo.update(params).await?;

        txn.commit().await?;

        Ok(event)
    }

    /// Deletes an event and, through cascades, its registrations. Missing events are ignored.
    pub async fn delete_event(&self, id: i32) -> Result<(), AppError> {
        EventRepository::new(self.db).delete(id).await?;

        tracing::info!("Deleted event {}", id);

        Ok(())
    }

    /// Adds a group to the event's participating groups.
    ///
    /// Assigning a group that is already listed leaves the groups unchanged but still
    /// counts as an update and bumps the version.
    pub async fn assign_group_to_event(
        &self,
        event_id: i32,
        group_id: i32,
    ) -> Result<Event, AppError> {
        let txn = self.db.begin().await?;
        let repo = EventRepository::new(&txn);

        let event = repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| event_not_found(event_id))?;
        if GroupRepository::new(&txn)
            .find_by_id(group_id)
            .await?
            .is_none()
        {
            return Err(group_not_found(group_id));
        }

        let mut group_ids = event.group_ids();
        if !group_ids.contains(&group_id) {
            group_ids.push(group_id);
        }

        let event = repo
            .update(UpdateEventParam::with_groups(event, group_ids))
            .await?;

        txn.commit().await?;

        Ok(event)
    }

    /// Removes a group from the event's participating groups.
    pub async fn remove_group_from_event(
        &self,
        event_id: i32,
        group_id: i32,
    ) -> Result<Event, AppError> {
        let txn = self.db.begin().await?;
        let repo = EventRepository::new(&txn);

        let event = repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| event_not_found(event_id))?;
        if GroupRepository::new(&txn)
            .find_by_id(group_id)
            .await?
            .is_none()
        {
            return Err(group_not_found(group_id));
        }

        let mut group_ids = event.group_ids();
        group_ids.retain(|id| *id != group_id);

        let event = repo
            .update(UpdateEventParam::with_groups(event, group_ids))
            .await?;

        txn.commit().await?;

        Ok(event)
    }

    /// Gets the events that explicitly list the group.
    ///
    /// # Returns
    /// - `Ok(Vec<Event>)` - Assigned events, possibly empty
    /// - `Err(AppError::NotFound)` - Group does not exist
    pub async fn get_events_for_group(&self, group_id: i32) -> Result<Vec<Event>, AppError> {
        if GroupRepository::new(self.db)
            .find_by_id(group_id)
            .await?
            .is_none()
        {
            return Err(group_not_found(group_id));
        }

        Ok(EventRepository::new(self.db)
            .find_by_group_id(group_id)
            .await?)
    }
}

pub(crate) fn event_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Event with id {} does not exist", id))
}
