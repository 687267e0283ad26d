//! Registration domain models and parameters.

use chrono::NaiveDateTime;
use sea_orm::DbErr;

use crate::{
    model::registration::{
        CreateRegistrationDto, RegistrationDto, RegistrationStatusDto, UpdateRegistrationDto,
    },
    server::model::{event::Event, scout::Scout},
};

/// Lifecycle state of a registration, stored as its upper-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Parses the stored column value.
    ///
    /// # Returns
    /// - `Ok(RegistrationStatus)` - Known status name
    /// - `Err(DbErr::Custom)` - Column holds an unknown value
    pub fn from_column(value: &str) -> Result<Self, DbErr> {
        match value {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(DbErr::Custom(format!(
                "Unknown registration status '{}'",
                other
            ))),
        }
    }

    pub fn into_dto(self) -> RegistrationStatusDto {
        match self {
            Self::Pending => RegistrationStatusDto::Pending,
            Self::Confirmed => RegistrationStatusDto::Confirmed,
            Self::Cancelled => RegistrationStatusDto::Cancelled,
        }
    }
}

impl From<RegistrationStatusDto> for RegistrationStatus {
    fn from(dto: RegistrationStatusDto) -> Self {
        match dto {
            RegistrationStatusDto::Pending => Self::Pending,
            RegistrationStatusDto::Confirmed => Self::Confirmed,
            RegistrationStatusDto::Cancelled => Self::Cancelled,
        }
    }
}

/// A scout's registration for an event, carrying both full aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub id: i32,
    pub version: i64,
    pub scout: Scout,
    pub event: Event,
    pub note: String,
    pub status: RegistrationStatus,
    pub registration_date: NaiveDateTime,
    pub account_id: String,
}

impl Registration {
    /// Converts the registration row together with its loaded scout and event.
    ///
    /// # Returns
    /// - `Ok(Registration)` - Converted domain model
    /// - `Err(DbErr::Custom)` - The stored status is not a known value
    pub fn from_entity(
        entity: entity::registration::Model,
        scout: Scout,
        event: Event,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            version: entity.version,
            scout,
            event,
            note: entity.note,
            status: RegistrationStatus::from_column(&entity.status)?,
            registration_date: entity.registration_date,
            account_id: entity.account_id,
        })
    }

    pub fn into_dto(self) -> RegistrationDto {
        RegistrationDto {
            id: self.id,
            version: self.version,
            scout: self.scout.into_dto(),
            event: self.event.into_dto(),
            note: self.note,
            status: self.status.into_dto(),
            registration_date: self.registration_date,
            account_id: self.account_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRegistrationParam {
    pub scout_id: i32,
    pub event_id: i32,
    pub note: String,
    pub status: RegistrationStatus,
    pub registration_date: NaiveDateTime,
    pub account_id: String,
}

impl CreateRegistrationParam {
    /// Converts the request body, stamping the registration date with the current time.
    pub fn from_dto(dto: CreateRegistrationDto) -> Self {
        Self {
            scout_id: dto.scout_id,
            event_id: dto.event_id,
            note: dto.note,
            status: dto
                .status
                .map(RegistrationStatus::from)
                .unwrap_or(RegistrationStatus::Pending),
            registration_date: chrono::Utc::now().naive_utc(),
            account_id: dto.account_id,
        }
    }
}

/// Update of the mutable registration fields.
///
/// `scout_id` and `event_id` must equal the stored values; the service rejects
/// any attempt to move a registration to another scout or event.
#[derive(Debug, Clone)]
pub struct UpdateRegistrationParam {
    pub id: i32,
    pub version: i64,
    pub scout_id: i32,
    pub event_id: i32,
    pub note: String,
    pub status: RegistrationStatus,
    pub account_id: String,
}

impl UpdateRegistrationParam {
    pub fn from_dto(id: i32, dto: UpdateRegistrationDto) -> Self {
        Self {
            id,
            version: dto.version,
            scout_id: dto.scout_id,
            event_id: dto.event_id,
            note: dto.note,
            status: dto.status.into(),
            account_id: dto.account_id,
        }
    }
}
