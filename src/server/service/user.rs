//! User service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        key_from_path,
        user::{CreateUserParam, User},
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::DbErr)` - Database error, including a duplicate token
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let user = UserRepository::new(self.db).create(param).await?;

        tracing::debug!("Created user {}", user.id);

        Ok(user)
    }

    /// Retrieves every user.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        Ok(users)
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i64) -> Result<User, AppError> {
        let user = match key_from_path(id) {
            Some(id) => UserRepository::new(self.db).find_by_id(id).await?,
            None => None,
        };

        user.ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
