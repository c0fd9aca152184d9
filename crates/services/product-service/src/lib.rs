//! Product Service Library
//!
//! Product catalog CRUD over the products table plus the stock
//! consumer: a queue bound to the order exchange receives
//! `order.created` events and decrements stock for every line item.

pub mod config;
pub mod consumer;
pub mod handlers;
pub mod infra;
pub mod openapi;
pub mod repository;
pub mod service;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use broker::TopicExchange;
use domain::{ORDER_CREATED_KEY, PRODUCT_ORDER_QUEUE};

use crate::config::ProductServiceConfig;
use crate::infra::Database;
use crate::repository::ProductStore;
use crate::service::ProductManager;
use crate::state::AppState;

/// Run the product service as an embedded component (for combined binary).
///
/// Binds the order queue on the given exchange before serving, so no
/// `order.created` published afterwards can be missed.
pub async fn run_embedded(
    host: &str,
    port: u16,
    order_exchange: Arc<TopicExchange>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ProductServiceConfig::from_env();
    run_server_with_config(host, port, config, order_exchange).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = ProductServiceConfig::from_env();
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
    config: ProductServiceConfig,
    order_exchange: Arc<TopicExchange>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Database::connect(&config.database_url).await?;

    // Create repository and service
    let product_repo = Arc::new(ProductStore::new(db.get_connection()));
    let product_service = Arc::new(ProductManager::new(product_repo));

    // Bind the order queue and spawn the stock consumer
    let queue = order_exchange.bind_queue(PRODUCT_ORDER_QUEUE, ORDER_CREATED_KEY);
    let consumer_service: Arc<dyn crate::service::ProductService> = product_service.clone();
    tokio::spawn(consumer::consume_order_events(queue, consumer_service));

    // Create app state and router
    let state = AppState::new(product_service, db);
    let app = handlers::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Build address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Product service listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
