//! Order service - order lifecycle plus the order.created event.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::warn;

use broker::EventPublisher;
use common::{AppError, AppResult};
use domain::{Order, ORDER_CREATED_KEY, ORDER_STATUS_CREATED};

use crate::repository::{OrderDraft, OrderItemDraft, OrderRepository};

/// Order service trait for dependency injection.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Get order by ID
    async fn get_order(&self, id: i64) -> AppResult<Order>;

    /// Get all orders for a user
    async fn get_orders_by_user(&self, user_id: i64) -> AppResult<Vec<Order>>;

    /// Get all orders with a given status
    async fn get_orders_by_status(&self, status: &str) -> AppResult<Vec<Order>>;

    /// List all orders
    async fn list_orders(&self) -> AppResult<Vec<Order>>;

    /// Create an order in status CREATED and publish `order.created`
    async fn create_order(
        &self,
        user_id: i64,
        total_amount: Decimal,
        items: Vec<OrderItemDraft>,
    ) -> AppResult<Order>;

    /// Overwrite an order's status
    async fn update_order_status(&self, id: i64, status: String) -> AppResult<Order>;

    /// Delete order by ID
    async fn delete_order(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of OrderService.
pub struct OrderManager {
    repo: Arc<dyn OrderRepository>,
    publisher: Arc<dyn EventPublisher>,
}

impl OrderManager {
    /// Create new order service instance
    pub fn new(repo: Arc<dyn OrderRepository>, publisher: Arc<dyn EventPublisher>) -> Self {
        Self { repo, publisher }
    }

    /// Publish the created event; publish failures never fail the write.
    async fn publish_created(&self, order: &Order) {
        let payload = match serde_json::to_value(order.created_event()) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(order_id = order.id, "failed to encode order event: {}", e);
                return;
            }
        };

        if let Err(e) = self.publisher.publish(ORDER_CREATED_KEY, payload).await {
            warn!(order_id = order.id, "failed to publish order event: {}", e);
        }
    }
}

#[async_trait]
impl OrderService for OrderManager {
    async fn get_order(&self, id: i64) -> AppResult<Order> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn get_orders_by_user(&self, user_id: i64) -> AppResult<Vec<Order>> {
        self.repo.find_by_user_id(user_id).await
    }

    async fn get_orders_by_status(&self, status: &str) -> AppResult<Vec<Order>> {
        self.repo.find_by_status(status).await
    }

    async fn list_orders(&self) -> AppResult<Vec<Order>> {
        self.repo.list().await
    }

    async fn create_order(
        &self,
        user_id: i64,
        total_amount: Decimal,
        items: Vec<OrderItemDraft>,
    ) -> AppResult<Order> {
        let draft = OrderDraft {
            user_id,
            status: ORDER_STATUS_CREATED.to_string(),
            total_amount,
            created_at: Utc::now(),
            items,
        };

        let order = self.repo.create(draft).await?;

        self.publish_created(&order).await;

        Ok(order)
    }

    async fn update_order_status(&self, id: i64, status: String) -> AppResult<Order> {
        self.repo.update_status(id, status).await
    }

    async fn delete_order(&self, id: i64) -> AppResult<()> {
        self.repo.delete(id).await
    }
}
