//! Publisher trait for dependency injection.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::BrokerResult;
use crate::exchange::TopicExchange;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Publisher seam injected into services that emit domain events.
///
/// The in-process [`TopicExchange`] implements it directly; a
/// wire-level broker client would implement the same trait.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a JSON payload under a routing key.
    async fn publish(&self, routing_key: &str, payload: Value) -> BrokerResult<()>;
}

#[async_trait]
impl EventPublisher for TopicExchange {
    async fn publish(&self, routing_key: &str, payload: Value) -> BrokerResult<()> {
        TopicExchange::publish(self, routing_key, payload);
        Ok(())
    }
}
