//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::service::AuthService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub db: Database,
}

impl AppState {
    /// Create new app state.
    pub fn new(auth_service: Arc<dyn AuthService>, db: Database) -> Self {
        Self { auth_service, db }
    }
}
