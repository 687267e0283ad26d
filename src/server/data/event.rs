use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::HashMap;

use crate::server::{
    data::group::GroupRepository,
    model::{
        event::{CreateEventParam, Event, UpdateEventParam},
        group::Group,
    },
};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an event together with its participating groups
    pub async fn create(&self, params: CreateEventParam) -> Result<Event, DbErr> {
        let event = entity::event::ActiveModel {
            name: ActiveValue::Set(params.name),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            meeting_point: ActiveValue::Set(params.meeting_point),
            location: ActiveValue::Set(params.location),
            cost: ActiveValue::Set(params.cost),
            additional_info: ActiveValue::Set(params.additional_info),
            version: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.insert_groups(event.id, &params.group_ids).await?;

        self.find_by_id(event.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Event with id {} not found after creation",
                event.id
            )))
    }

    /// Updates an event if its stored version still matches, replacing its groups.
    ///
    /// # Returns
    /// - `Ok(Event)` - Updated event carrying the incremented version
    /// - `Err(DbErr::RecordNotUpdated)` - Event is missing or was modified concurrently
    pub async fn update(&self, params: UpdateEventParam) -> Result<Event, DbErr> {
        let result = entity::prelude::Event::update_many()
            .set(entity::event::ActiveModel {
                name: ActiveValue::Set(params.name),
                start_date: ActiveValue::Set(params.start_date),
                end_date: ActiveValue::Set(params.end_date),
                meeting_point: ActiveValue::Set(params.meeting_point),
                location: ActiveValue::Set(params.location),
                cost: ActiveValue::Set(params.cost),
                additional_info: ActiveValue::Set(params.additional_info),
                version: ActiveValue::Set(params.version + 1),
                ..Default::default()
            })
            .filter(entity::event::Column::Id.eq(params.id))
            .filter(entity::event::Column::Version.eq(params.version))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        entity::prelude::EventGroup::delete_many()
            .filter(entity::event_group::Column::EventId.eq(params.id))
            .exec(self.db)
            .await?;

        self.insert_groups(params.id, &params.group_ids).await?;

        self.find_by_id(params.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Event with id {} not found after update",
                params.id
            )))
    }

    /// Deletes an event; group associations and registrations cascade
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Event::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let Some(event) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.load(vec![event]).await?.pop())
    }

    pub async fn find_all(&self) -> Result<Vec<Event>, DbErr> {
        let events = entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        self.load(events).await
    }

    /// Gets the events that explicitly list the group as participating.
    ///
    /// Events open to every group (no participating groups) are not included.
    pub async fn find_by_group_id(&self, group_id: i32) -> Result<Vec<Event>, DbErr> {
        let event_ids: Vec<i32> = entity::prelude::EventGroup::find()
            .filter(entity::event_group::Column::GroupId.eq(group_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.event_id)
            .collect();

        self.find_by_ids(&event_ids).await
    }

    /// Gets the events with the given ids ordered by id. Unknown ids are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Event>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let events = entity::prelude::Event::find()
            .filter(entity::event::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        self.load(events).await
    }

    async fn insert_groups(&self, event_id: i32, group_ids: &[i32]) -> Result<(), DbErr> {
        let mut seen = Vec::with_capacity(group_ids.len());
        for &group_id in group_ids {
            if seen.contains(&group_id) {
                continue;
            }
            seen.push(group_id);

            entity::event_group::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                group_id: ActiveValue::Set(group_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Attaches participating groups to the given event rows, keeping their order
    async fn load(&self, events: Vec<entity::event::Model>) -> Result<Vec<Event>, DbErr> {
        if events.is_empty() {
            return Ok(Vec::new());
        }

        let event_ids: Vec<i32> = events.iter().map(|e| e.id).collect();

        let links = entity::prelude::EventGroup::find()
            .filter(entity::event_group::Column::EventId.is_in(event_ids))
            .all(self.db)
            .await?;

        let group_ids: Vec<i32> = links.iter().map(|l| l.group_id).collect();
        let groups: HashMap<i32, Group> = GroupRepository::new(self.db)
            .find_by_ids(&group_ids)
            .await?
            .into_iter()
            .map(|g| (g.id, g))
            .collect();

        let mut groups_by_event: HashMap<i32, Vec<Group>> = HashMap::new();
        for link in links {
            if let Some(group) = groups.get(&link.group_id) {
                groups_by_event
                    .entry(link.event_id)
                    .or_default()
                    .push(group.clone());
            }
        }

        Ok(events
            .into_iter()
            .map(|event| {
                let mut groups = groups_by_event.remove(&event.id).unwrap_or_default();
                groups.sort_by_key(|g| g.id);
                Event::from_entity(event, groups)
            })
            .collect())
    }
}
