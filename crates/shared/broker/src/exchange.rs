//! In-process topic exchange.

use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::error::{BrokerError, BrokerResult};
use crate::topic;

/// A message delivered to a bound queue.
#[derive(Debug, Clone)]
pub struct Delivery {
    pub routing_key: String,
    pub payload: Value,
}

impl Delivery {
    /// Decode the JSON payload into a typed event.
    pub fn json<T: DeserializeOwned>(&self) -> BrokerResult<T> {
        serde_json::from_value(self.payload.clone()).map_err(BrokerError::from)
    }
}

/// Consumer side of a queue binding.
pub struct Queue {
    name: String,
    rx: mpsc::UnboundedReceiver<Delivery>,
}

impl Queue {
    /// Queue name as declared at bind time.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Receive the next delivery; `None` when the exchange is gone.
    pub async fn recv(&mut self) -> Option<Delivery> {
        self.rx.recv().await
    }
}

struct Binding {
    queue: String,
    pattern: String,
    tx: mpsc::UnboundedSender<Delivery>,
}

/// Named exchange routing published messages to bound queues by topic
/// pattern.
pub struct TopicExchange {
    name: String,
    bindings: Mutex<Vec<Binding>>,
}

impl TopicExchange {
    /// Declare a new exchange.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bindings: Mutex::new(Vec::new()),
        }
    }

    /// Exchange name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declare a queue and bind it to this exchange with a pattern.
    pub fn bind_queue(&self, queue: impl Into<String>, pattern: impl Into<String>) -> Queue {
        let queue = queue.into();
        let pattern = pattern.into();
        let (tx, rx) = mpsc::unbounded_channel();

        self.bindings
            .lock()
            .expect("exchange bindings lock poisoned")
            .push(Binding {
                queue: queue.clone(),
                pattern,
                tx,
            });

        Queue { name: queue, rx }
    }

    /// Publish a JSON payload under a routing key.
    ///
    /// Fire-and-forget: every bound queue whose pattern matches gets a
    /// copy; a queue whose consumer is gone is logged and dropped, and
    /// the publish itself never fails.
    pub fn publish(&self, routing_key: &str, payload: Value) {
        let mut bindings = self
            .bindings
            .lock()
            .expect("exchange bindings lock poisoned");

        bindings.retain(|binding| {
            if !topic::matches(&binding.pattern, routing_key) {
                return true;
            }

            let delivery = Delivery {
                routing_key: routing_key.to_string(),
                payload: payload.clone(),
            };

            match binding.tx.send(delivery) {
                Ok(()) => {
                    debug!(
                        exchange = %self.name,
                        routing_key,
                        queue = %binding.queue,
                        "delivered event"
                    );
                    true
                }
                Err(_) => {
                    warn!(
                        exchange = %self.name,
                        routing_key,
                        queue = %binding.queue,
                        "consumer gone, dropping binding"
                    );
                    false
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn publish_reaches_matching_binding() {
        let exchange = TopicExchange::new("order-exchange");
        let mut queue = exchange.bind_queue("product.order.queue", "order.created");

        exchange.publish("order.created", json!({"orderId": 1}));

        let delivery = queue.recv().await.expect("delivery");
        assert_eq!(delivery.routing_key, "order.created");
        assert_eq!(delivery.payload["orderId"], 1);
    }

    #[tokio::test]
    async fn publish_skips_non_matching_binding() {
        let exchange = TopicExchange::new("user.exchange");
        let mut created = exchange.bind_queue("user.created.queue", "user.created");
        let _updated = exchange.bind_queue("user.updated.queue", "user.updated");

        exchange.publish("user.created", json!({"id": 7}));
        exchange.publish("user.created", json!({"id": 8}));

        assert_eq!(created.recv().await.unwrap().payload["id"], 7);
        assert_eq!(created.recv().await.unwrap().payload["id"], 8);
    }

    #[tokio::test]
    async fn publish_to_dropped_consumer_does_not_fail() {
        let exchange = TopicExchange::new("order-exchange");
        let queue = exchange.bind_queue("gone.queue", "order.*");
        drop(queue);

        // Must not panic or error
        exchange.publish("order.created", json!({}));
    }
}
