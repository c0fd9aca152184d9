//! Message exchange glue for inter-service events.
//!
//! Models a topic exchange: producers publish JSON payloads under a
//! routing key, queues are bound to the exchange with a pattern, and
//! every matching binding receives a copy of the delivery.
//!
//! The transport is in-process (tokio channels); the [`EventPublisher`]
//! seam is where a wire-level broker client would slot in. Delivery is
//! fire-and-forget: there is no acknowledgment, retry or dead-letter
//! handling.

pub mod error;
pub mod exchange;
pub mod publisher;
pub mod topic;

pub use error::{BrokerError, BrokerResult};
pub use exchange::{Delivery, Queue, TopicExchange};
pub use publisher::EventPublisher;

#[cfg(any(test, feature = "test-utils"))]
pub use publisher::MockEventPublisher;
