use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::group::GroupDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub version: i64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub meeting_point: String,
    pub location: String,
    /// Empty when the event is open to every group.
    pub participating_groups: Vec<GroupDto>,
    pub cost: String,
    pub additional_info: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateEventDto {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub meeting_point: String,
    pub location: String,
    #[serde(default)]
    pub group_ids: Vec<i32>,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub additional_info: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateEventDto {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub meeting_point: String,
    pub location: String,
    #[serde(default)]
    pub group_ids: Vec<i32>,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub additional_info: String,
    pub version: i64,
}
