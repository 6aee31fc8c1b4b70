//! HTTP request handlers.
//!
//! Controllers extract and validate request input, convert DTOs into parameter models,
//! call the matching service and convert the resulting domain models back into DTOs.
//! Each domain module exposes a `routes()` function returning its endpoints together
//! with their OpenAPI descriptions.

pub mod extract;
pub mod group;
pub mod message;
pub mod root;
pub mod user;

#[cfg(test)]
mod test;
