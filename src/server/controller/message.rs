use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        message::{MessageDto, SendMessageDto},
    },
    server::{
        controller::extract::{AppJson, AppPath},
        error::AppError,
        model::message::SendMessageParam,
        service::message::MessageService,
        state::AppState,
    },
};

/// Tag for grouping message endpoints in OpenAPI documentation
pub static MESSAGE_TAG: &str = "message";

/// Returns the message endpoints with their OpenAPI descriptions.
pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(get_group_messages, send_message))
}

/// List the messages of a group.
///
/// Group existence is not checked separately, so an unknown group and a group
/// without messages both answer 404.
///
/// # Returns
/// - `200 OK` - JSON array of messages, oldest first
/// - `400 Bad Request` - Group ID is not an integer
/// - `404 Not Found` - `{"error": "No messages found in this group"}`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/groups/{group_id}/messages",
    tag = MESSAGE_TAG,
    params(
        ("group_id" = i64, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Messages of the group", body = Vec<MessageDto>),
        (status = 400, description = "Invalid group ID", body = ErrorDto),
        (status = 404, description = "No messages found in this group", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group_messages(
    State(state): State<AppState>,
    AppPath(group_id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let messages = MessageService::new(&state.db)
        .list_by_group(group_id)
        .await?;

    let messages_dto: Vec<MessageDto> = messages.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(messages_dto)))
}

/// Send a message to a group.
///
/// # Returns
/// - `200 OK` - `{"message": "Message sent"}`
/// - `400 Bad Request` - Malformed body, blank content or invalid group ID
/// - `404 Not Found` - `{"error": "Group not found"}`
/// - `500 Internal Server Error` - Database error, including an unknown `user_id`
#[utoipa::path(
    post,
    path = "/groups/{group_id}/messages",
    tag = MESSAGE_TAG,
    params(
        ("group_id" = i64, Path, description = "Group ID")
    ),
    request_body = SendMessageDto,
    responses(
        (status = 200, description = "Message sent", body = SuccessDto),
        (status = 400, description = "Invalid message data", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    AppPath(group_id): AppPath<i64>,
    AppJson(payload): AppJson<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = SendMessageParam::from_dto(group_id, payload)?;

    MessageService::new(&state.db).send(param).await?;

    Ok((StatusCode::OK, Json(SuccessDto::new("Message sent"))))
}
