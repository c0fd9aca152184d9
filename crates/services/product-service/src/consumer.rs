//! Order event consumer.
//!
//! Drains `product.order.queue` and decrements stock for every line
//! item of each created order. A missing product or a failed decrement
//! is logged and the rest of the order is still processed.

use std::sync::Arc;

use tracing::{error, info, warn};

use broker::Queue;
use common::AppError;
use domain::OrderCreatedEvent;

use crate::service::ProductService;

/// Consume order.created deliveries until the queue closes.
pub async fn consume_order_events(mut queue: Queue, service: Arc<dyn ProductService>) {
    info!(queue = queue.name(), "order consumer started");

    while let Some(delivery) = queue.recv().await {
        let event: OrderCreatedEvent = match delivery.json() {
            Ok(event) => event,
            Err(e) => {
                warn!(
                    routing_key = %delivery.routing_key,
                    "discarding undecodable order event: {}", e
                );
                continue;
            }
        };

        apply_order(&event, service.as_ref()).await;
    }

    info!("order consumer stopped, queue closed");
}

async fn apply_order(event: &OrderCreatedEvent, service: &dyn ProductService) {
    for item in &event.items {
        match service.adjust_stock(item.product_id, -item.quantity).await {
            Ok(product) => {
                info!(
                    order_id = event.order_id,
                    product_id = item.product_id,
                    quantity = item.quantity,
                    stock = product.stock_quantity,
                    "stock decremented"
                );
            }
            Err(AppError::NotFound) => {
                warn!(
                    order_id = event.order_id,
                    product_id = item.product_id,
                    "ordered product not in catalog, skipping"
                );
            }
            Err(e) => {
                error!(
                    order_id = event.order_id,
                    product_id = item.product_id,
                    "stock decrement failed: {}", e
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use serde_json::json;

    use broker::TopicExchange;
    use domain::{ORDER_CREATED_KEY, ORDER_EXCHANGE, PRODUCT_ORDER_QUEUE};

    use crate::repository::MockProductRepository;
    use crate::service::ProductManager;

    fn product(id: i64, stock: i32) -> domain::Product {
        domain::Product {
            id,
            name: "Mechanical Keyboard".to_string(),
            description: None,
            price: rust_decimal::Decimal::new(2999, 2),
            stock_quantity: stock,
            category: None,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn order_event_decrements_stock_per_item() {
        let mut repo = MockProductRepository::new();
        repo.expect_update_stock()
            .with(eq(7), eq(-3))
            .times(1)
            .returning(|id, delta| Ok(product(id, 10 + delta)));

        let exchange = TopicExchange::new(ORDER_EXCHANGE);
        let queue = exchange.bind_queue(PRODUCT_ORDER_QUEUE, ORDER_CREATED_KEY);
        let service = Arc::new(ProductManager::new(Arc::new(repo)));

        let handle = tokio::spawn(consume_order_events(queue, service));

        exchange.publish(
            ORDER_CREATED_KEY,
            json!({"orderId": 11, "items": [{"productId": 7, "quantity": 3}]}),
        );

        // Dropping the exchange closes the queue and ends the consumer
        drop(exchange);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn missing_product_does_not_stop_the_order() {
        let mut repo = MockProductRepository::new();
        repo.expect_update_stock()
            .with(eq(1), eq(-1))
            .times(1)
            .returning(|_, _| Err(AppError::NotFound));
        repo.expect_update_stock()
            .with(eq(2), eq(-2))
            .times(1)
            .returning(|id, delta| Ok(product(id, 5 + delta)));

        let exchange = TopicExchange::new(ORDER_EXCHANGE);
        let queue = exchange.bind_queue(PRODUCT_ORDER_QUEUE, ORDER_CREATED_KEY);
        let service = Arc::new(ProductManager::new(Arc::new(repo)));

        let handle = tokio::spawn(consume_order_events(queue, service));

        exchange.publish(
            ORDER_CREATED_KEY,
            json!({
                "orderId": 12,
                "items": [
                    {"productId": 1, "quantity": 1},
                    {"productId": 2, "quantity": 2}
                ]
            }),
        );

        drop(exchange);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn undecodable_event_is_discarded() {
        // No repository calls expected
        let repo = MockProductRepository::new();

        let exchange = TopicExchange::new(ORDER_EXCHANGE);
        let queue = exchange.bind_queue(PRODUCT_ORDER_QUEUE, ORDER_CREATED_KEY);
        let service = Arc::new(ProductManager::new(Arc::new(repo)));

        let handle = tokio::spawn(consume_order_events(queue, service));

        exchange.publish(ORDER_CREATED_KEY, json!({"not": "an order"}));

        drop(exchange);
        handle.await.unwrap();
    }
}
