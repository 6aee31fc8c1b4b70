//! Group factory for creating test group entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups with customizable fields.
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Group {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Group {}", id),
        }
    }

    /// Sets the name for the group.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the group entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::group::Model)` - Created group entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        let now = Utc::now();
        entity::group::ActiveModel {
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a group with default values.
///
/// Shorthand for `GroupFactory::new(db).build().await`.
pub async fn create_group(db: &DatabaseConnection) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db).build().await
}
