//! Group domain models and parameters.

use crate::model::group::{CreateGroupDto, GroupDto, UpdateGroupDto};

/// Organizational unit scouts belong to and events can be restricted to.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    pub version: i64,
    pub name: String,
}

impl Group {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::group::Model) -> Self {
        Self {
            id: entity.id,
            version: entity.version,
            name: entity.name,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            version: self.version,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGroupParam {
    pub name: String,
}

impl CreateGroupParam {
    pub fn from_dto(dto: CreateGroupDto) -> Self {
        Self { name: dto.name }
    }
}

/// Parameters for an optimistic-locked group update.
#[derive(Debug, Clone)]
pub struct UpdateGroupParam {
    pub id: i32,
    /// Version the caller read; the update only applies if it still matches.
    pub version: i64,
    pub name: String,
}

impl UpdateGroupParam {
    pub fn from_dto(id: i32, dto: UpdateGroupDto) -> Self {
        Self {
            id,
            version: dto.version,
            name: dto.name,
        }
    }
}
