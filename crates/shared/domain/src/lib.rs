//! Domain layer - entities and events shared across the services.
//!
//! This crate contains pure domain types with no infrastructure
//! dependencies. Each service maps these to and from its own database
//! models.

pub mod account;
pub mod constants;
pub mod events;
pub mod order;
pub mod payment;
pub mod product;
pub mod user;

pub use account::Account;
pub use constants::*;
pub use events::{OrderCreatedEvent, OrderItemEvent, UserEvent};
pub use order::{Order, OrderItem};
pub use payment::Payment;
pub use product::Product;
pub use user::User;
