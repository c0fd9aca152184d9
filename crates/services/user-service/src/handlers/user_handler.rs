//! User handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use validator::Validate;

use common::{AppResult, ValidatedJson};
use domain::User;

use crate::state::AppState;

/// User create/update request with validation.
///
/// PUT overwrites every mutable field, matching the POST body shape.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Full name cannot be empty"))]
    pub full_name: String,
}

/// Create user routes.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
        .route("/username/:username", get(get_user_by_username))
}

/// Get all users.
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Get user by ID.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

/// Get user by username.
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user_by_username(&username).await?;
    Ok(Json(user))
}

/// Create a new user.
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state
        .user_service
        .create_user(payload.username, payload.email, payload.full_name)
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update an existing user.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> AppResult<Json<User>> {
    let user = state
        .user_service
        .update_user(id, payload.username, payload.email, payload.full_name)
        .await?;
    Ok(Json(user))
}

/// Delete a user.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
