use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        group::{CreateGroupDto, GroupDto},
    },
    server::{
        controller::extract::{AppJson, AppPath},
        error::AppError,
        model::group::CreateGroupParam,
        service::group::GroupService,
        state::AppState,
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

/// Returns the group endpoints with their OpenAPI descriptions.
pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_groups, create_group))
        .routes(routes!(join_group))
}

/// List every group.
///
/// # Returns
/// - `200 OK` - JSON array of groups, `[]` when there are none
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "All groups", body = Vec<GroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let groups = GroupService::new(&state.db).get_all().await?;

    let groups_dto: Vec<GroupDto> = groups.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(groups_dto)))
}

/// Create a new group.
///
/// # Returns
/// - `200 OK` - `{"message": "Group created"}`
/// - `400 Bad Request` - Malformed body or blank name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/groups",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 200, description = "Group created", body = SuccessDto),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateGroupParam::try_from(payload)?;

    GroupService::new(&state.db).create(param).await?;

    Ok((StatusCode::OK, Json(SuccessDto::new("Group created"))))
}

/// Join a group.
///
/// Membership is not persisted; the call only confirms that the group exists.
///
/// # Returns
/// - `200 OK` - `{"message": "Joined group"}`
/// - `400 Bad Request` - Group ID is not an integer
/// - `404 Not Found` - `{"error": "Group not found"}`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/groups/{group_id}/join",
    tag = GROUP_TAG,
    params(
        ("group_id" = i64, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Joined group", body = SuccessDto),
        (status = 400, description = "Invalid group ID", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_group(
    State(state): State<AppState>,
    AppPath(group_id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    GroupService::new(&state.db).join(group_id).await?;

    Ok((StatusCode::OK, Json(SuccessDto::new("Joined group"))))
}
