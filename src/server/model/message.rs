//! Message domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::message::{MessageDto, SendMessageDto},
    server::{
        error::AppError,
        model::{key_from_path, require_non_blank},
    },
};

/// Chat message posted by a user to exactly one group.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub group_id: i32,
    pub user_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Message {
    /// Converts the message domain model to a DTO for API responses.
    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            group_id: self.group_id,
            user_id: self.user_id,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a message domain model at the repository boundary.
    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            group_id: entity.group_id,
            user_id: entity.user_id,
            content: entity.content,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for posting a message to a group.
///
/// `user_id` is not checked against existing users before the insert.
#[derive(Debug, Clone)]
pub struct SendMessageParam {
    pub group_id: i32,
    pub user_id: i32,
    pub content: String,
}

impl SendMessageParam {
    /// Combines the group from the request path with the posted message body.
    ///
    /// # Returns
    /// - `Ok(SendMessageParam)` - Validated parameters
    /// - `Err(AppError::NotFound)` - Group ID is outside the key range, so no group has it
    /// - `Err(AppError::BadRequest)` - Message content is blank
    pub fn from_dto(group_id: i64, dto: SendMessageDto) -> Result<Self, AppError> {
        let group_id = key_from_path(group_id)
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))?;
        require_non_blank("content", &dto.content)?;

        Ok(Self {
            group_id,
            user_id: dto.user_id,
            content: dto.content,
        })
    }
}
