//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::service::OrderService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub order_service: Arc<dyn OrderService>,
    pub db: Database,
}

impl AppState {
    /// Create new app state.
    pub fn new(order_service: Arc<dyn OrderService>, db: Database) -> Self {
        Self { order_service, db }
    }
}
