//! Message factory for creating test message entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test messages with customizable fields.
///
/// The referenced group and user must already exist, since the schema enforces both
/// foreign keys.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::message::MessageFactory;
///
/// let message = MessageFactory::new(&db, group.id, user.id)
///     .content("Hello Group")
///     .build()
///     .await?;
/// ```
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    group_id: i32,
    user_id: i32,
    content: String,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory with default values.
    ///
    /// Defaults:
    /// - content: `"Message {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `group_id` - ID of the group the message is posted to
    /// - `user_id` - ID of the user sending the message
    pub fn new(db: &'a DatabaseConnection, group_id: i32, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            group_id,
            user_id,
            content: format!("Message {}", id),
        }
    }

    /// Sets the content for the message.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builds and inserts the message entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::message::Model)` - Created message entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        let now = Utc::now();
        entity::message::ActiveModel {
            group_id: ActiveValue::Set(self.group_id),
            user_id: ActiveValue::Set(self.user_id),
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a message with default content.
///
/// Shorthand for `MessageFactory::new(db, group_id, user_id).build().await`.
pub async fn create_message(
    db: &DatabaseConnection,
    group_id: i32,
    user_id: i32,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db, group_id, user_id).build().await
}
