//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Existence checks**: Verifying referenced groups before acting on them
//! - **Not-found mapping**: Turning empty lookups into `AppError::NotFound`
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! No service wraps its queries in a transaction; an existence check and the insert that
//! follows it are separate statements.

pub mod group;
pub mod message;
pub mod user;
