//! Authentication handlers.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use validator::Validate;

use common::{AppResult, ValidatedJson};

use crate::service::AuthResponse;
use crate::state::AppState;

/// Credentials payload for both register and login.
#[derive(Debug, Deserialize, Validate)]
pub struct AuthRequest {
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

/// Create auth routes.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/validate", get(validate_token))
}

/// Register a new account.
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AuthRequest>,
) -> AppResult<StatusCode> {
    state
        .auth_service
        .register(payload.username, payload.password)
        .await?;
    Ok(StatusCode::CREATED)
}

/// Login with username and password.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AuthRequest>,
) -> AppResult<Json<AuthResponse>> {
    let response = state
        .auth_service
        .login(payload.username, payload.password)
        .await?;
    Ok(Json(response))
}

/// Check the Authorization header for a Bearer token.
pub async fn validate_token(State(state): State<AppState>, headers: HeaderMap) -> Json<bool> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    Json(state.auth_service.validate_token(token))
}
