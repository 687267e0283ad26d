use chrono::NaiveDate;

use crate::server::model::{
    event::CreateEventParam,
    scout::{Contact, CreateScoutParam},
};


fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn john_doe(group_ids: Vec<i32>) -> CreateScoutParam {
    CreateScoutParam {
        name: "John Doe".to_string(),
        birth_date: date(2012, 5, 15),
        address: "Main Street 1, 12345 Springfield".to_string(),
        phone_number: "+49 123 456789".to_string(),
        health_insurance: "AOK".to_string(),
        allergy_info: "None".to_string(),
        vaccination_info: "Complete".to_string(),
        contacts: vec![Contact {
            name: "Jane Doe".to_string(),
            phone_number: "+49 987 654321".to_string(),
            email: "jane.doe@example.com".to_string(),
            relationship: "Mother".to_string(),
        }],
        group_ids,
        last_updated: NaiveDate::MIN,
    }
}

fn emma_smith(group_ids: Vec<i32>) -> CreateScoutParam {
    CreateScoutParam {
        name: "Emma Smith".to_string(),
        birth_date: date(2013, 9, 2),
        address: "Oak Avenue 7, 12345 Springfield".to_string(),
        phone_number: String::new(),
        health_insurance: "TK".to_string(),
        allergy_info: "Pollen".to_string(),
        vaccination_info: String::new(),
        contacts: vec![
            Contact {
                name: "Robert Smith".to_string(),
                phone_number: "+49 555 1234".to_string(),
                email: String::new(),
                relationship: "Father".to_string(),
            },
            Contact {
                name: "Anna Smith".to_string(),
                phone_number: "+49 555 5678".to_string(),
                email: "anna@example.com".to_string(),
                relationship: "Mother".to_string(),
            },
        ],
        group_ids,
        last_updated: NaiveDate::MIN,
    }
}

fn summer_camp(group_ids: Vec<i32>) -> CreateEventParam {
    CreateEventParam {
        name: "Summer Camp".to_string(),
        start_date: date(2025, 7, 15),
        end_date: date(2025, 7, 22),
        meeting_point: "Scout Hall".to_string(),
        location: "Lake Campground".to_string(),
        group_ids,
        cost: "150 EUR".to_string(),
        additional_info: "Bring sleeping bag".to_string(),
    }
}

fn hiking_trip(group_ids: Vec<i32>) -> CreateEventParam {
    CreateEventParam {
        name: "Hiking Trip".to_string(),
        start_date: date(2025, 9, 6),
        end_date: date(2025, 9, 7),
        meeting_point: "Train Station".to_string(),
        location: "Black Forest".to_string(),
        group_ids,
        cost: "30 EUR".to_string(),
        additional_info: String::new(),
    }
}
