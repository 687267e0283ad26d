use crate::server::{
    data::event::EventRepository,
    model::event::{CreateEventParam, UpdateEventParam},
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_group_id;
mod update;

fn create_params(name: &str, group_ids: Vec<i32>) -> CreateEventParam {
    CreateEventParam {
        name: name.to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 7, 15).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 7, 22).unwrap(),
        meeting_point: "Scout Hall".to_string(),
        location: "Lake Campground".to_string(),
        group_ids,
        cost: "150 EUR".to_string(),
        additional_info: "Bring sleeping bag".to_string(),
    }
}
