//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::service::PaymentService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub payment_service: Arc<dyn PaymentService>,
    pub db: Database,
}

impl AppState {
    /// Create new app state.
    pub fn new(payment_service: Arc<dyn PaymentService>, db: Database) -> Self {
        Self {
            payment_service,
            db,
        }
    }
}
