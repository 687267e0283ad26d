use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{event::EventDto, scout::ScoutDto};

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum RegistrationStatusDto {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RegistrationDto {
    pub id: i32,
    pub version: i64,
    pub scout: ScoutDto,
    pub event: EventDto,
    pub note: String,
    pub status: RegistrationStatusDto,
    pub registration_date: NaiveDateTime,
    pub account_id: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateRegistrationDto {
    pub scout_id: i32,
    pub event_id: i32,
    #[serde(default)]
    pub note: String,
    /// Defaults to `PENDING`.
    #[serde(default)]
    pub status: Option<RegistrationStatusDto>,
    #[serde(default)]
    pub account_id: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateRegistrationDto {
    /// Must match the stored scout.
    pub scout_id: i32,
    /// Must match the stored event.
    pub event_id: i32,
    #[serde(default)]
    pub note: String,
    pub status: RegistrationStatusDto,
    #[serde(default)]
    pub account_id: String,
    pub version: i64,
}
