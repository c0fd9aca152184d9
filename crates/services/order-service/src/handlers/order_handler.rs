//! Order handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use common::{AppResult, ValidatedJson};
use domain::Order;

use crate::repository::OrderItemDraft;
use crate::state::AppState;

/// Order creation request with validation.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[validate(range(min = 1, message = "User id must be positive"))]
    #[schema(example = 1)]
    pub user_id: i64,
    #[schema(example = "59.98")]
    pub total_amount: Decimal,
    #[validate(length(min = 1, message = "Order must have at least one item"), nested)]
    pub items: Vec<OrderItemRequest>,
}

/// Line item inside an order creation request.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    #[schema(example = 7)]
    pub product_id: i64,
    #[validate(length(min = 1, message = "Product name cannot be empty"))]
    #[schema(example = "Mechanical Keyboard")]
    pub product_name: String,
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    #[schema(example = 2)]
    pub quantity: i32,
    #[schema(example = "29.99")]
    pub price: Decimal,
}

/// Status query parameter for status updates.
#[derive(Debug, Deserialize, IntoParams)]
pub struct StatusQuery {
    pub status: String,
}

impl From<OrderItemRequest> for OrderItemDraft {
    fn from(item: OrderItemRequest) -> Self {
        OrderItemDraft {
            product_id: item.product_id,
            product_name: item.product_name,
            quantity: item.quantity,
            price: item.price,
        }
    }
}

/// Create order routes.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/:id", get(get_order).delete(delete_order))
        .route("/:id/status", put(update_order_status))
        .route("/user/:user_id", get(get_orders_by_user))
        .route("/status/:status", get(get_orders_by_status))
}

/// Get all orders.
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Orders",
    responses(
        (status = 200, description = "All orders", body = [Order])
    )
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    let orders = state.order_service.list_orders().await?;
    Ok(Json(orders))
}

/// Get order by ID.
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order found", body = Order),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Order>> {
    let order = state.order_service.get_order(id).await?;
    Ok(Json(order))
}

/// Get all orders for a user.
#[utoipa::path(
    get,
    path = "/api/orders/user/{user_id}",
    tag = "Orders",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Orders for the user", body = [Order])
    )
)]
pub async fn get_orders_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = state.order_service.get_orders_by_user(user_id).await?;
    Ok(Json(orders))
}

/// Get all orders with a given status.
#[utoipa::path(
    get,
    path = "/api/orders/status/{status}",
    tag = "Orders",
    params(("status" = String, Path, description = "Order status")),
    responses(
        (status = 200, description = "Orders with the status", body = [Order])
    )
)]
pub async fn get_orders_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = state.order_service.get_orders_by_status(&status).await?;
    Ok(Json(orders))
}

/// Create a new order.
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Orders",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, description = "Validation failure")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<OrderRequest>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let items = payload.items.into_iter().map(Into::into).collect();
    let order = state
        .order_service
        .create_order(payload.user_id, payload.total_amount, items)
        .await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Update an order's status.
#[utoipa::path(
    put,
    path = "/api/orders/{id}/status",
    tag = "Orders",
    params(("id" = i64, Path, description = "Order id"), StatusQuery),
    responses(
        (status = 200, description = "Order updated", body = Order),
        (status = 404, description = "Order not found")
    )
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<StatusQuery>,
) -> AppResult<Json<Order>> {
    let order = state
        .order_service
        .update_order_status(id, query.status)
        .await?;
    Ok(Json(order))
}

/// Delete an order.
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.order_service.delete_order(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyboard_item() -> OrderItemRequest {
        OrderItemRequest {
            product_id: 7,
            product_name: "Mechanical Keyboard".to_string(),
            quantity: 2,
            price: Decimal::new(2999, 2),
        }
    }

    #[test]
    fn well_formed_request_passes_validation() {
        let request = OrderRequest {
            user_id: 1,
            total_amount: Decimal::new(5998, 2),
            items: vec![keyboard_item()],
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn order_without_items_is_rejected() {
        let request = OrderRequest {
            user_id: 1,
            total_amount: Decimal::ZERO,
            items: vec![],
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.to_string().contains("Order must have at least one item"));
    }

    #[test]
    fn item_with_non_positive_quantity_is_rejected() {
        let request = OrderRequest {
            user_id: 1,
            total_amount: Decimal::new(2999, 2),
            items: vec![OrderItemRequest {
                quantity: -3,
                ..keyboard_item()
            }],
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.to_string().contains("Quantity must be positive"));
    }

    #[test]
    fn item_with_empty_name_is_rejected() {
        let request = OrderRequest {
            user_id: 1,
            total_amount: Decimal::new(2999, 2),
            items: vec![OrderItemRequest {
                product_name: String::new(),
                ..keyboard_item()
            }],
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.to_string().contains("Product name cannot be empty"));
    }
}
