//! Event factory for creating test events and their participating groups.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let event = EventFactory::new(&db)
///     .name("Summer Camp")
///     .group(group.id)
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    location: String,
    group_ids: Vec<i32>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Event {id}"` where id is auto-incremented
    /// - dates: 2025-07-15 to 2025-07-22
    /// - groups: none (open to all groups)
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Event {}", id),
            start_date: NaiveDate::from_ymd_opt(2025, 7, 15).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2025, 7, 22).expect("valid date"),
            location: format!("Campground {}", id),
            group_ids: Vec::new(),
        }
    }

    /// Sets the event name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the start and end dates.
    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Adds a participating group. The group must already exist.
    pub fn group(mut self, group_id: i32) -> Self {
        self.group_ids.push(group_id);
        self
    }

    /// Builds and inserts the event and its group associations.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let event = entity::event::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            meeting_point: ActiveValue::Set("Scout Hall".to_string()),
            location: ActiveValue::Set(self.location),
            cost: ActiveValue::Set("150 EUR".to_string()),
            additional_info: ActiveValue::Set(String::new()),
            version: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await?;

        for group_id in self.group_ids {
            entity::event_group::ActiveModel {
                event_id: ActiveValue::Set(event.id),
                group_id: ActiveValue::Set(group_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(event)
    }
}

/// Creates an event with default values.
///
/// Shorthand for `EventFactory::new(db).build().await`.
pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}
