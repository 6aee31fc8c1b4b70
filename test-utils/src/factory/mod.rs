//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows directly through SeaORM active
//! models so tests can arrange state without going through the repositories under test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::create_user(&db).await?;
//!     let group = factory::create_group(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, group, message) =
//!         factory::helpers::create_message_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .username("alice")
//!     .token("secret")
//!     .build()
//!     .await?;
//! ```

pub mod group;
pub mod helpers;
pub mod message;
pub mod user;

pub use group::create_group;
pub use message::create_message;
pub use user::create_user;
