//! Scout domain models and parameters.
//!
//! A scout is an aggregate of the `scouts` row, its ordered emergency contacts and
//! its group memberships. Repositories assemble the aggregate from the three tables
//! and hand it to the service layer as a single [`Scout`].

use chrono::NaiveDate;

use crate::{
    model::scout::{ContactDto, CreateScoutDto, ScoutDto, UpdateScoutDto},
    server::model::group::Group,
};

/// Emergency contact of a scout. Position in the scout's list is significant.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub relationship: String,
}

impl Contact {
    pub fn from_entity(entity: entity::scout_contact::Model) -> Self {
        Self {
            name: entity.name,
            phone_number: entity.phone_number,
            email: entity.email,
            relationship: entity.relationship,
        }
    }

    pub fn from_dto(dto: ContactDto) -> Self {
        Self {
            name: dto.name,
            phone_number: dto.phone_number,
            email: dto.email,
            relationship: dto.relationship,
        }
    }

    pub fn into_dto(self) -> ContactDto {
        ContactDto {
            name: self.name,
            phone_number: self.phone_number,
            email: self.email,
            relationship: self.relationship,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scout {
    pub id: i32,
    pub version: i64,
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub phone_number: String,
    pub health_insurance: String,
    pub allergy_info: String,
    pub vaccination_info: String,
    /// Contacts in insertion order.
    pub contacts: Vec<Contact>,
    /// Groups ordered by id, without duplicates.
    pub groups: Vec<Group>,
    pub last_updated: NaiveDate,
}

impl Scout {
    /// Converts the scout row and its already loaded children to a domain model.
    ///
    /// # Arguments
    /// - `entity` - The scout row
    /// - `contacts` - Contact rows of this scout, ordered by `contact_order`
    /// - `groups` - Groups the scout belongs to
    pub fn from_entity(
        entity: entity::scout::Model,
        contacts: Vec<entity::scout_contact::Model>,
        groups: Vec<Group>,
    ) -> Self {
        Self {
            id: entity.id,
            version: entity.version,
            name: entity.name,
            birth_date: entity.birth_date,
            address: entity.address,
            phone_number: entity.phone_number,
            health_insurance: entity.health_insurance,
            allergy_info: entity.allergy_info,
            vaccination_info: entity.vaccination_info,
            contacts: contacts.into_iter().map(Contact::from_entity).collect(),
            groups,
            last_updated: entity.last_updated,
        }
    }

    pub fn into_dto(self) -> ScoutDto {
        ScoutDto {
            id: self.id,
            version: self.version,
            name: self.name,
            birth_date: self.birth_date,
            address: self.address,
            phone_number: self.phone_number,
            health_insurance: self.health_insurance,
            allergy_info: self.allergy_info,
            vaccination_info: self.vaccination_info,
            contacts: self.contacts.into_iter().map(Contact::into_dto).collect(),
            groups: self.groups.into_iter().map(Group::into_dto).collect(),
            last_updated: self.last_updated,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateScoutParam {
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub phone_number: String,
    pub health_insurance: String,
    pub allergy_info: String,
    pub vaccination_info: String,
    pub contacts: Vec<Contact>,
    pub group_ids: Vec<i32>,
    pub last_updated: NaiveDate,
}

impl CreateScoutParam {
    /// Converts the request body. `last_updated` is stamped by the service.
    pub fn from_dto(dto: CreateScoutDto) -> Self {
        Self {
            name: dto.name,
            birth_date: dto.birth_date,
            address: dto.address,
            phone_number: dto.phone_number,
            health_insurance: dto.health_insurance,
            allergy_info: dto.allergy_info,
            vaccination_info: dto.vaccination_info,
            contacts: dto.contacts.into_iter().map(Contact::from_dto).collect(),
            group_ids: dto.group_ids,
            last_updated: NaiveDate::MIN,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateScoutParam {
    pub id: i32,
    pub version: i64,
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub phone_number: String,
    pub health_insurance: String,
    pub allergy_info: String,
    pub vaccination_info: String,
    /// Replaces the stored contact list.
    pub contacts: Vec<Contact>,
    /// Replaces the stored group memberships.
    pub group_ids: Vec<i32>,
    pub last_updated: NaiveDate,
}

impl UpdateScoutParam {
    /// Converts the request body. `last_updated` is stamped by the service.
    pub fn from_dto(id: i32, dto: UpdateScoutDto) -> Self {
        Self {
            id,
            version: dto.version,
            name: dto.name,
            birth_date: dto.birth_date,
            address: dto.address,
            phone_number: dto.phone_number,
            health_insurance: dto.health_insurance,
            allergy_info: dto.allergy_info,
            vaccination_info: dto.vaccination_info,
            contacts: dto.contacts.into_iter().map(Contact::from_dto).collect(),
            group_ids: dto.group_ids,
            last_updated: NaiveDate::MIN,
        }
    }
}
