use crate::server::{
    data::registration::RegistrationRepository,
    model::registration::{
        CreateRegistrationParam, RegistrationStatus, UpdateRegistrationParam,
    },
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod exists_by_event_and_scout;
mod find;
mod update;

fn create_params(scout_id: i32, event_id: i32) -> CreateRegistrationParam {
    CreateRegistrationParam {
        scout_id,
        event_id,
        note: "Vegetarian".to_string(),
        status: RegistrationStatus::Pending,
        registration_date: NaiveDate::from_ymd_opt(2025, 5, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap(),
        account_id: "account-42".to_string(),
    }
}
