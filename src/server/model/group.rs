//! Group domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::group::{CreateGroupDto, GroupDto},
    server::{error::AppError, model::require_non_blank},
};

/// Named chat room that messages are posted to.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Group {
    /// Converts the group domain model to a DTO for API responses.
    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a group domain model at the repository boundary.
    pub fn from_entity(entity: entity::group::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating a new group.
#[derive(Debug, Clone)]
pub struct CreateGroupParam {
    pub name: String,
}

impl TryFrom<CreateGroupDto> for CreateGroupParam {
    type Error = AppError;

    fn try_from(dto: CreateGroupDto) -> Result<Self, Self::Error> {
        require_non_blank("name", &dto.name)?;

        Ok(Self { name: dto.name })
    }
}
