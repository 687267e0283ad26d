use crate::server::{
    data::scout::ScoutRepository,
    model::scout::{Contact, CreateScoutParam, UpdateScoutParam},
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find;
mod update;

fn contact(name: &str) -> Contact {
    Contact {
        name: name.to_string(),
        phone_number: "+49 111 222333".to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        relationship: "Parent".to_string(),
    }
}

fn create_params(name: &str, contacts: Vec<Contact>, group_ids: Vec<i32>) -> CreateScoutParam {
    CreateScoutParam {
        name: name.to_string(),
        birth_date: NaiveDate::from_ymd_opt(2012, 3, 4).unwrap(),
        address: "Lindenweg 5".to_string(),
        phone_number: "+49 170 1234567".to_string(),
        health_insurance: "TK".to_string(),
        allergy_info: "Peanuts".to_string(),
        vaccination_info: "Tetanus 2020".to_string(),
        contacts,
        group_ids,
        last_updated: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
    }
}

fn update_params(id: i32, version: i64, created: CreateScoutParam) -> UpdateScoutParam {
    UpdateScoutParam {
        id,
        version,
        name: created.name,
        birth_date: created.birth_date,
        address: created.address,
        phone_number: created.phone_number,
        health_insurance: created.health_insurance,
        allergy_info: created.allergy_info,
        vaccination_info: created.vaccination_info,
        contacts: created.contacts,
        group_ids: created.group_ids,
        last_updated: created.last_updated,
    }
}
