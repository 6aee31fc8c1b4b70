//! Message service for business logic.
//!
//! Posting checks that the target group exists before inserting. Listing does not look
//! at the group at all: an unknown group and a group without messages both yield
//! "No messages found in this group".

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{group::GroupRepository, message::MessageRepository},
    error::AppError,
    model::{
        key_from_path,
        message::{Message, SendMessageParam},
    },
};

/// Service providing business logic for group messages.
pub struct MessageService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    /// Creates a new MessageService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a message to a group.
    ///
    /// # Returns
    /// - `Ok(Message)` - The stored message
    /// - `Err(AppError::NotFound)` - Target group does not exist
    /// - `Err(AppError::DbErr)` - Database error, including an unknown `user_id`
    pub async fn send(&self, param: SendMessageParam) -> Result<Message, AppError> {
        if !GroupRepository::new(self.db).exists(param.group_id).await? {
            return Err(AppError::NotFound("Group not found".to_string()));
        }

        let message = MessageRepository::new(self.db).create(param).await?;

        tracing::debug!(
            "User {} sent message {} to group {}",
            message.user_id,
            message.id,
            message.group_id
        );

        Ok(message)
    }

    /// Lists the messages of a group, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Message>)` - At least one message
    /// - `Err(AppError::NotFound)` - No messages for that group ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list_by_group(&self, group_id: i64) -> Result<Vec<Message>, AppError> {
        let messages = match key_from_path(group_id) {
            Some(group_id) => {
                MessageRepository::new(self.db)
                    .get_by_group_id(group_id)
                    .await?
            }
            None => Vec::new(),
        };

        if messages.is_empty() {
            return Err(AppError::NotFound(
                "No messages found in this group".to_string(),
            ));
        }

        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn send_fails_for_missing_group() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_chat_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;

        let result = MessageService::new(db)
            .send(SendMessageParam {
                group_id: 999,
                user_id: user.id,
                content: "Hello Group".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Group not found"));

        Ok(())
    }

    #[tokio::test]
    async fn list_treats_empty_group_as_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_chat_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let group = factory::create_group(db).await?;

        let result = MessageService::new(db).list_by_group(group.id.into()).await;

        assert!(matches!(
            result,
            Err(AppError::NotFound(msg)) if msg == "No messages found in this group"
        ));

        Ok(())
    }

    #[tokio::test]
    async fn send_then_list_returns_message() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_chat_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let group = factory::create_group(db).await?;
        let service = MessageService::new(db);

        service
            .send(SendMessageParam {
                group_id: group.id,
                user_id: user.id,
                content: "Hello Group".to_string(),
            })
            .await?;

        let messages = service.list_by_group(group.id.into()).await?;

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "Hello Group");
        assert_eq!(messages[0].group_id, group.id);

        Ok(())
    }
}
