//! Event payloads exchanged between services.
//!
//! Events are JSON-encoded and routed by `<entity>.<event>` keys
//! (`order.created`, `user.created`, `user.updated`).

use serde::{Deserialize, Serialize};

/// Published by the order service when an order is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreatedEvent {
    pub order_id: i64,
    pub items: Vec<OrderItemEvent>,
}

/// Line item inside an order event; only what the stock consumer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemEvent {
    pub product_id: i64,
    pub quantity: i32,
}

/// Published by the user service on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEvent {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
}

impl From<&crate::User> for UserEvent {
    fn from(user: &crate::User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
        }
    }
}
