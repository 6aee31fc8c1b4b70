//! Group data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::group::{CreateGroupParam, Group};

/// Repository providing database operations for group management.
pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    /// Creates a new GroupRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new group with both timestamps set to the current UTC time.
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group with generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateGroupParam) -> Result<Group, DbErr> {
        let now = Utc::now();
        let entity = entity::group::ActiveModel {
            name: ActiveValue::Set(param.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Group::from_entity(entity))
    }

    /// Gets all groups ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Group>)` - Every group (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Group>, DbErr> {
        let entities = entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Group::from_entity).collect())
    }

    /// Checks whether a group with the given ID exists.
    ///
    /// Performs a count query instead of loading the row.
    ///
    /// # Returns
    /// - `Ok(true)` - Group exists
    /// - `Ok(false)` - No group with that ID
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Group::find()
            .filter(entity::group::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
