//! API data transfer objects.
//!
//! Request and response bodies exchanged over HTTP. Server-side domain models convert
//! into these at the controller boundary.

pub mod api;
pub mod group;
pub mod message;
pub mod user;
