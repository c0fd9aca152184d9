//! Payment Service Library
//!
//! Payment CRUD over the payments table. Creation stamps a generated
//! transaction id, the creation time and the PROCESSED status
//! regardless of what the client sent.

pub mod config;
pub mod handlers;
pub mod infra;
pub mod repository;
pub mod service;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::config::PaymentServiceConfig;
use crate::infra::Database;
use crate::repository::PaymentStore;
use crate::service::PaymentManager;
use crate::state::AppState;

/// Run the payment service as an embedded component (for combined binary).
pub async fn run_embedded(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let config = PaymentServiceConfig::from_env();
    run_server_with_config(host, port, config).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = PaymentServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database_url).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(
    host: &str,
    port: u16,
    config: PaymentServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Database::connect(&config.database_url).await?;

    // Create repository and service
    let payment_repo = Arc::new(PaymentStore::new(db.get_connection()));
    let payment_service = Arc::new(PaymentManager::new(payment_repo));

    // Create app state and router
    let state = AppState::new(payment_service, db);
    let app = handlers::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Build address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Payment service listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
