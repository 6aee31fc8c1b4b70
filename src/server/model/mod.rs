//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated
//! input from controllers down to services and repositories.

pub mod group;
pub mod message;
pub mod user;

use crate::server::error::AppError;

/// Rejects blank required string fields with a 400 naming the field.
pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("Field '{}' must not be empty", field)));
    }

    Ok(())
}

/// Narrows an ID taken from the request path to the `i32` primary key range.
///
/// IDs outside that range cannot match any row and yield `None`.
pub(crate) fn key_from_path(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}
