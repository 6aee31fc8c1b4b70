//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{error::AppError, model::require_non_blank},
};

/// Registered chat user identified by an opaque unique token.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            token: self.token,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            token: entity.token,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating a new user.
///
/// Token uniqueness is left to the database constraint.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub token: String,
}

impl TryFrom<CreateUserDto> for CreateUserParam {
    type Error = AppError;

    fn try_from(dto: CreateUserDto) -> Result<Self, Self::Error> {
        require_non_blank("username", &dto.username)?;
        require_non_blank("token", &dto.token)?;

        Ok(Self {
            username: dto.username,
            token: dto.token,
        })
    }
}
