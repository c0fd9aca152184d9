//! HTTP handlers and routes.

pub mod health_handler;
pub mod payment_handler;

use axum::Router;

use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/health", health_handler::health_routes())
        .nest("/api/payments", payment_handler::payment_routes())
        .with_state(state)
}
