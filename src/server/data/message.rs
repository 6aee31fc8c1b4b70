//! Message data repository for database operations.
//!
//! Provides the `MessageRepository` for posting messages and listing them per group.
//! Group existence is not checked here; callers verify it before inserting.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::message::{Message, SendMessageParam};

/// Repository providing database operations for group messages.
pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    /// Creates a new MessageRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a message stamped with the current UTC time in both timestamp columns.
    ///
    /// # Arguments
    /// - `param` - Target group, sending user and message content
    ///
    /// # Returns
    /// - `Ok(Message)` - The created message with generated ID
    /// - `Err(DbErr)` - Database error during insert, including foreign key violations
    pub async fn create(&self, param: SendMessageParam) -> Result<Message, DbErr> {
        let now = Utc::now();
        let entity = entity::message::ActiveModel {
            group_id: ActiveValue::Set(param.group_id),
            user_id: ActiveValue::Set(param.user_id),
            content: ActiveValue::Set(param.content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Message::from_entity(entity))
    }

    /// Gets every message posted to a group, oldest first.
    ///
    /// # Arguments
    /// - `group_id` - ID of the group to list messages for
    ///
    /// # Returns
    /// - `Ok(Vec<Message>)` - Messages ordered by ID (empty if none or group missing)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_group_id(&self, group_id: i32) -> Result<Vec<Message>, DbErr> {
        let entities = entity::prelude::Message::find()
            .filter(entity::message::Column::GroupId.eq(group_id))
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Message::from_entity).collect())
    }
}
