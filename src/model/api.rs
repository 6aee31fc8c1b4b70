use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error envelope returned by every failing endpoint.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Confirmation envelope returned by endpoints that create or acknowledge something.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuccessDto {
    pub message: String,
}

impl SuccessDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
