//! Combined binary for development - runs all services in one process.
//!
//! Sharing one pair of exchanges wires the services together: order
//! publishes reach the product stock consumer, and user lifecycle
//! events have somewhere to go.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use broker::TopicExchange;
use domain::{ORDER_EXCHANGE, USER_EXCHANGE};

#[derive(Parser)]
#[command(name = "shop-services")]
#[command(about = "Combined microservices binary for development")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all services in a single process (development mode)
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value = "8081")]
        auth_port: u16,
        #[arg(long, default_value = "8082")]
        user_port: u16,
        #[arg(long, default_value = "8083")]
        payment_port: u16,
        #[arg(long, default_value = "8084")]
        order_port: u16,
        #[arg(long, default_value = "8085")]
        product_port: u16,
    },
    /// Run database migrations for all services
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            auth_port,
            user_port,
            payment_port,
            order_port,
            product_port,
        } => {
            info!("Starting combined services in development mode");
            info!("  Auth service:    http://{}:{}", host, auth_port);
            info!("  User service:    http://{}:{}", host, user_port);
            info!("  Payment service: http://{}:{}", host, payment_port);
            info!("  Order service:   http://{}:{}", host, order_port);
            info!("  Product service: http://{}:{}", host, product_port);

            // Exchanges shared by every service in this process
            let order_exchange = Arc::new(TopicExchange::new(ORDER_EXCHANGE));
            let user_exchange = Arc::new(TopicExchange::new(USER_EXCHANGE));

            let auth_host = host.clone();
            let auth_handle = tokio::spawn(async move {
                if let Err(e) = auth_service_lib::run_embedded(&auth_host, auth_port).await {
                    error!("Auth service failed: {}", e);
                }
            });

            let user_host = host.clone();
            let user_publisher = user_exchange.clone();
            let user_handle = tokio::spawn(async move {
                if let Err(e) =
                    user_service_lib::run_embedded(&user_host, user_port, user_publisher).await
                {
                    error!("User service failed: {}", e);
                }
            });

            let payment_host = host.clone();
            let payment_handle = tokio::spawn(async move {
                if let Err(e) =
                    payment_service_lib::run_embedded(&payment_host, payment_port).await
                {
                    error!("Payment service failed: {}", e);
                }
            });

            // Product binds its queue before order starts publishing
            let product_host = host.clone();
            let product_exchange = order_exchange.clone();
            let product_handle = tokio::spawn(async move {
                if let Err(e) =
                    product_service_lib::run_embedded(&product_host, product_port, product_exchange)
                        .await
                {
                    error!("Product service failed: {}", e);
                }
            });

            // Give the product service a moment to bind its consumer
            tokio::time::sleep(std::time::Duration::from_millis(500)).await;

            let order_host = host.clone();
            let order_publisher = order_exchange.clone();
            let order_handle = tokio::spawn(async move {
                if let Err(e) =
                    order_service_lib::run_embedded(&order_host, order_port, order_publisher).await
                {
                    error!("Order service failed: {}", e);
                }
            });

            // Wait for any service to exit (which would indicate an error)
            tokio::select! {
                _ = auth_handle => error!("Auth service exited unexpectedly"),
                _ = user_handle => error!("User service exited unexpectedly"),
                _ = payment_handle => error!("Payment service exited unexpectedly"),
                _ = order_handle => error!("Order service exited unexpectedly"),
                _ = product_handle => error!("Product service exited unexpectedly"),
            }
        }
        Commands::Migrate { action } => {
            macro_rules! convert {
                ($lib:ident) => {
                    match action {
                        MigrateAction::Up => $lib::MigrateAction::Up,
                        MigrateAction::Down => $lib::MigrateAction::Down,
                        MigrateAction::Status => $lib::MigrateAction::Status,
                        MigrateAction::Fresh => $lib::MigrateAction::Fresh,
                    }
                };
            }

            // Each service owns its own schema
            auth_service_lib::run_migrations(convert!(auth_service_lib)).await?;
            user_service_lib::run_migrations(convert!(user_service_lib)).await?;
            payment_service_lib::run_migrations(convert!(payment_service_lib)).await?;
            order_service_lib::run_migrations(convert!(order_service_lib)).await?;
            product_service_lib::run_migrations(convert!(product_service_lib)).await?;
        }
    }

    Ok(())
}
