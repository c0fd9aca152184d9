//! Order service unit tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use rust_decimal::Decimal;

use broker::MockEventPublisher;
use common::AppError;
use domain::{Order, OrderItem, ORDER_CREATED_KEY, ORDER_STATUS_CREATED};
use order_service_lib::repository::{MockOrderRepository, OrderDraft, OrderItemDraft};
use order_service_lib::service::{OrderManager, OrderService};

fn order_from_draft(id: i64, draft: OrderDraft) -> Order {
    let items = draft
        .items
        .into_iter()
        .enumerate()
        .map(|(i, item)| OrderItem {
            id: i as i64 + 1,
            product_id: item.product_id,
            product_name: item.product_name,
            quantity: item.quantity,
            price: item.price,
        })
        .collect();

    Order {
        id,
        user_id: draft.user_id,
        status: draft.status,
        total_amount: draft.total_amount,
        created_at: draft.created_at,
        items,
    }
}

fn keyboard_item() -> OrderItemDraft {
    OrderItemDraft {
        product_id: 7,
        product_name: "Mechanical Keyboard".to_string(),
        quantity: 3,
        price: Decimal::new(2999, 2),
    }
}

#[tokio::test]
async fn create_order_starts_created_and_publishes_once() {
    let mut repo = MockOrderRepository::new();
    repo.expect_create()
        .withf(|draft| draft.status == ORDER_STATUS_CREATED)
        .returning(|draft| Ok(order_from_draft(11, draft)));

    let mut publisher = MockEventPublisher::new();
    publisher
        .expect_publish()
        .withf(|key, payload| {
            key == ORDER_CREATED_KEY
                && payload["orderId"] == 11
                && payload["items"][0]["productId"] == 7
                && payload["items"][0]["quantity"] == 3
        })
        .times(1)
        .returning(|_, _| Ok(()));

    let service = OrderManager::new(Arc::new(repo), Arc::new(publisher));
    let order = service
        .create_order(42, Decimal::new(8997, 2), vec![keyboard_item()])
        .await
        .unwrap();

    assert_eq!(order.id, 11);
    assert_eq!(order.status, ORDER_STATUS_CREATED);
    assert_eq!(order.items.len(), 1);
}

#[tokio::test]
async fn create_order_succeeds_when_publish_fails() {
    let mut repo = MockOrderRepository::new();
    repo.expect_create()
        .returning(|draft| Ok(order_from_draft(12, draft)));

    let mut publisher = MockEventPublisher::new();
    publisher
        .expect_publish()
        .times(1)
        .returning(|_, _| Err(broker::BrokerError::Closed("order-exchange".to_string())));

    let service = OrderManager::new(Arc::new(repo), Arc::new(publisher));
    let order = service
        .create_order(42, Decimal::new(2999, 2), vec![keyboard_item()])
        .await
        .unwrap();

    // The write sticks even though the event was lost
    assert_eq!(order.id, 12);
}

#[tokio::test]
async fn get_order_not_found() {
    let mut repo = MockOrderRepository::new();
    repo.expect_find_by_id().with(eq(99)).returning(|_| Ok(None));

    let service = OrderManager::new(Arc::new(repo), Arc::new(MockEventPublisher::new()));
    let result = service.get_order(99).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn update_status_overwrites_status() {
    let mut repo = MockOrderRepository::new();
    repo.expect_update_status()
        .with(eq(5), eq("SHIPPED".to_string()))
        .returning(|id, status| {
            Ok(Order {
                id,
                user_id: 42,
                status,
                total_amount: Decimal::new(2999, 2),
                created_at: Utc::now(),
                items: vec![],
            })
        });

    let service = OrderManager::new(Arc::new(repo), Arc::new(MockEventPublisher::new()));
    let order = service
        .update_order_status(5, "SHIPPED".to_string())
        .await
        .unwrap();

    assert_eq!(order.status, "SHIPPED");
}

#[tokio::test]
async fn update_status_of_missing_order_is_not_found() {
    let mut repo = MockOrderRepository::new();
    repo.expect_update_status()
        .returning(|_, _| Err(AppError::NotFound));

    let service = OrderManager::new(Arc::new(repo), Arc::new(MockEventPublisher::new()));
    let result = service.update_order_status(99, "SHIPPED".to_string()).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn delete_missing_order_is_not_found() {
    let mut repo = MockOrderRepository::new();
    repo.expect_delete().returning(|_| Err(AppError::NotFound));

    let service = OrderManager::new(Arc::new(repo), Arc::new(MockEventPublisher::new()));
    let result = service.delete_order(99).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn get_orders_by_status_passes_filter_through() {
    let mut repo = MockOrderRepository::new();
    repo.expect_find_by_status()
        .withf(|status| status == "CREATED")
        .returning(|_| Ok(vec![]));

    let service = OrderManager::new(Arc::new(repo), Arc::new(MockEventPublisher::new()));
    let orders = service.get_orders_by_status("CREATED").await.unwrap();

    assert!(orders.is_empty());
}
