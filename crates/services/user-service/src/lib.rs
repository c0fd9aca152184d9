//! User Service Library
//!
//! Directory CRUD over the users table, publishing `user.created` and
//! `user.updated` events. Can run standalone or embedded in the
//! combined binary sharing one exchange with the other services.

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

use broker::EventPublisher;

use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::UserManager;
use crate::state::AppState;

/// Run the user service as an embedded component (for combined binary).
pub async fn run_embedded(
    host: &str,
    port: u16,
    publisher: Arc<dyn EventPublisher>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = UserServiceConfig::from_env();
    run_server_with_config(host, port, config, publisher).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = UserServiceConfig::from_env();
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
    config: UserServiceConfig,
    publisher: Arc<dyn EventPublisher>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Database::connect(&config.database_url).await?;

    // Create repository and service
    let user_repo = Arc::new(UserStore::new(db.get_connection()));
    let user_service = Arc::new(UserManager::new(user_repo, publisher));

    // Create app state and router
    let state = AppState::new(user_service, db);
    let app = handlers::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Build address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("User service listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
