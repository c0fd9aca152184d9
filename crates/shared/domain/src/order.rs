//! Order entity and its line items.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::events::{OrderCreatedEvent, OrderItemEvent};

/// Order with its owned line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub status: String,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// Line item belonging to an order. Items have no lifecycle of their
/// own; they are created with their parent order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OrderItem {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i32,
    pub price: Decimal,
}

impl Order {
    /// Build the event payload published when this order is created.
    pub fn created_event(&self) -> OrderCreatedEvent {
        OrderCreatedEvent {
            order_id: self.id,
            items: self
                .items
                .iter()
                .map(|item| OrderItemEvent {
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}
