use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct MessageDto {
    pub id: i32,
    pub group_id: i32,
    pub user_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of a message posted to a group; the group comes from the request path.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct SendMessageDto {
    pub user_id: i32,
    pub content: String,
}
