//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! Users are only ever inserted and read; there are no update or delete paths.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::user::{CreateUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user.
    ///
    /// Both timestamps are set to the current UTC time. A token that already exists
    /// violates the unique constraint and is returned as a database error.
    ///
    /// # Arguments
    /// - `param` - Create parameters containing username and token
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with generated ID
    /// - `Err(DbErr)` - Database error during insert, including duplicate tokens
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            token: ActiveValue::Set(param.token),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Gets all users in storage order.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Every user ordered by ID (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Finds a user by ID.
    ///
    /// # Arguments
    /// - `id` - Primary key of the user
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }
}
