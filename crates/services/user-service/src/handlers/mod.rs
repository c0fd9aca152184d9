//! HTTP handlers and routes.

pub mod health_handler;
pub mod user_handler;

use axum::Router;

use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/health", health_handler::health_routes())
        .nest("/api/users", user_handler::user_routes())
        .with_state(state)
}
