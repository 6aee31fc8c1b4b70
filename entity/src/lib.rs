//! SeaORM entity definitions for the chat backend tables.

pub mod prelude;

pub mod group;
pub mod message;
pub mod user;
