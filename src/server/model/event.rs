//! Event domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::event::{CreateEventDto, EventDto, UpdateEventDto},
    server::model::group::Group,
};

/// Camp, trip or workshop scouts can register for.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub version: i64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub meeting_point: String,
    pub location: String,
    /// Groups ordered by id. Empty means open to every group.
    pub participating_groups: Vec<Group>,
    pub cost: String,
    pub additional_info: String,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model, participating_groups: Vec<Group>) -> Self {
        Self {
            id: entity.id,
            version: entity.version,
            name: entity.name,
            start_date: entity.start_date,
            end_date: entity.end_date,
            meeting_point: entity.meeting_point,
            location: entity.location,
            participating_groups,
            cost: entity.cost,
            additional_info: entity.additional_info,
        }
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            version: self.version,
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            meeting_point: self.meeting_point,
            location: self.location,
            participating_groups: self
                .participating_groups
                .into_iter()
                .map(Group::into_dto)
                .collect(),
            cost: self.cost,
            additional_info: self.additional_info,
        }
    }

    /// Ids of the participating groups, in order.
    pub fn group_ids(&self) -> Vec<i32> {
        self.participating_groups.iter().map(|g| g.id).collect()
    }
}

#[derive(Debug, Clone)]
pub struct CreateEventParam {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub meeting_point: String,
    pub location: String,
    pub group_ids: Vec<i32>,
    pub cost: String,
    pub additional_info: String,
}

impl CreateEventParam {
    pub fn from_dto(dto: CreateEventDto) -> Self {
        Self {
            name: dto.name,
            start_date: dto.start_date,
            end_date: dto.end_date,
            meeting_point: dto.meeting_point,
            location: dto.location,
            group_ids: dto.group_ids,
            cost: dto.cost,
            additional_info: dto.additional_info,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateEventParam {
    pub id: i32,
    pub version: i64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub meeting_point: String,
    pub location: String,
    /// Replaces the stored participating groups.
    pub group_ids: Vec<i32>,
    pub cost: String,
    pub additional_info: String,
}

impl UpdateEventParam {
    pub fn from_dto(id: i32, dto: UpdateEventDto) -> Self {
        Self {
            id,
            version: dto.version,
            name: dto.name,
            start_date: dto.start_date,
            end_date: dto.end_date,
            meeting_point: dto.meeting_point,
            location: dto.location,
            group_ids: dto.group_ids,
            cost: dto.cost,
            additional_info: dto.additional_info,
        }
    }

    /// Builds an update that keeps every field of `event` except the group list.
    pub fn with_groups(event: Event, group_ids: Vec<i32>) -> Self {
        Self {
            id: event.id,
            version: event.version,
            name: event.name,
            start_date: event.start_date,
            end_date: event.end_date,
            meeting_point: event.meeting_point,
            location: event.location,
            group_ids,
            cost: event.cost,
            additional_info: event.additional_info,
        }
    }
}
