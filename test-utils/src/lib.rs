//! Test fixtures for the chat backend.
//!
//! Every test gets its own in-memory SQLite database whose tables are generated from the
//! `entity` crate, so repository, service and router tests can run side by side without
//! sharing rows. Rows are arranged through `factory` rather than the code under test.
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_group_messages() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     let group = factory::create_group(db).await?;
//!     factory::create_message(db, group.id, user.id).await?;
//!
//!     // Exercise the repository or router against `db`...
//!
//!     Ok(())
//! }
//! ```
//!
//! Tests touching a single table can ask for just that one with
//! `TestBuilder::with_table(entity::prelude::Group)`.

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
