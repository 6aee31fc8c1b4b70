//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every repository performs exactly one query per method; combining queries is left to
//! the service layer.

pub mod group;
pub mod message;
pub mod user;

#[cfg(test)]
mod test;
