use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        user::{CreateUserDto, UserDto},
    },
    server::{
        controller::extract::{AppJson, AppPath},
        error::AppError,
        model::user::CreateUserParam,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Returns the user endpoints with their OpenAPI descriptions.
pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_users, create_user))
        .routes(routes!(get_user))
}

/// List every user.
///
/// # Returns
/// - `200 OK` - JSON array of users in storage order, `[]` when there are none
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    let users_dto: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Register a new user.
///
/// Token uniqueness is enforced by the database only, so a duplicate token
/// surfaces as a 500 rather than a dedicated conflict response.
///
/// # Returns
/// - `200 OK` - `{"message": "User created"}`
/// - `400 Bad Request` - Malformed body or blank field
/// - `500 Internal Server Error` - Database error, including a duplicate token
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created", body = SuccessDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateUserParam::try_from(payload)?;

    UserService::new(&state.db).create(param).await?;

    Ok((StatusCode::OK, Json(SuccessDto::new("User created"))))
}

/// Get a user by ID.
///
/// # Returns
/// - `200 OK` - The user
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - `{"error": "User not found"}`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The requested user", body = UserDto),
        (status = 400, description = "Invalid user ID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
