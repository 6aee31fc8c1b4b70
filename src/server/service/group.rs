//! Group service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::group::GroupRepository,
    error::AppError,
    model::{
        group::{CreateGroupParam, Group},
        key_from_path,
    },
};

/// Service providing business logic for group management.
pub struct GroupService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    /// Creates a new GroupService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new group.
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateGroupParam) -> Result<Group, AppError> {
        let group = GroupRepository::new(self.db).create(param).await?;

        tracing::debug!("Created group {}", group.id);

        Ok(group)
    }

    /// Retrieves every group.
    pub async fn get_all(&self) -> Result<Vec<Group>, AppError> {
        let groups = GroupRepository::new(self.db).get_all().await?;
        Ok(groups)
    }

    /// Joins a group.
    ///
    /// Only verifies that the group exists. No membership is recorded, so joining the
    /// same group repeatedly has no additional effect.
    ///
    /// # Returns
    /// - `Ok(())` - Group exists
    /// - `Err(AppError::NotFound)` - No group with that ID
    /// - `Err(AppError::DbErr)` - Database error during the existence check
    pub async fn join(&self, group_id: i64) -> Result<(), AppError> {
        let exists = match key_from_path(group_id) {
            Some(group_id) => GroupRepository::new(self.db).exists(group_id).await?,
            None => false,
        };

        if !exists {
            return Err(AppError::NotFound("Group not found".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn join_succeeds_for_existing_group() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Group)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let group = factory::create_group(db).await?;
        let service = GroupService::new(db);

        service.join(group.id.into()).await?;
        service.join(group.id.into()).await?;

        Ok(())
    }

    #[tokio::test]
    async fn join_fails_for_missing_group() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Group)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = GroupService::new(db).join(999).await;

        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Group not found"));
    }
}
