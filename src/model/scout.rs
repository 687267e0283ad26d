use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::group::GroupDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ContactDto {
    pub name: String,
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub relationship: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ScoutDto {
    pub id: i32,
    pub version: i64,
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub phone_number: String,
    pub health_insurance: String,
    pub allergy_info: String,
    pub vaccination_info: String,
    pub contacts: Vec<ContactDto>,
    pub groups: Vec<GroupDto>,
    pub last_updated: NaiveDate,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateScoutDto {
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
    #[serde(default)]
    pub phone_number: String,
    pub health_insurance: String,
    #[serde(default)]
    pub allergy_info: String,
    #[serde(default)]
    pub vaccination_info: String,
    pub contacts: Vec<ContactDto>,
    #[serde(default)]
    pub group_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateScoutDto {
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
    #[serde(default)]
    pub phone_number: String,
    pub health_insurance: String,
    #[serde(default)]
    pub allergy_info: String,
    #[serde(default)]
    pub vaccination_info: String,
    pub contacts: Vec<ContactDto>,
    #[serde(default)]
    pub group_ids: Vec<i32>,
    pub version: i64,
}
