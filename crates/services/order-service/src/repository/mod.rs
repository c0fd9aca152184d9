//! Data access layer.

pub mod entities;
pub mod order_repository;

pub use order_repository::{OrderDraft, OrderItemDraft, OrderRepository, OrderStore};

#[cfg(any(test, feature = "test-utils"))]
pub use order_repository::MockOrderRepository;
