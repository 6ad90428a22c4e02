// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::{mpsc, RwLock};

use crate::errors::QueueError;
use crate::traits::MessageQueue;
use crate::types::QueueMessage;

/// Routes messages to per-consumer unbounded channels, keyed by message `type`.
///
/// One consumer per name; registering a name again replaces the previous receiver.
/// Delivery is in publish order per consumer. There are no acks and no redelivery.
#[derive(Default)]
pub struct LocalMessageQueue {
    consumers: RwLock<HashMap<String, mpsc::UnboundedSender<QueueMessage>>>,
}

impl LocalMessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start receiving every message whose `type` is `name`.
    pub async fn register_consumer(&self, name: &str) -> mpsc::UnboundedReceiver<QueueMessage> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.consumers
            .write()
            .await
            .insert(name.to_string(), sender);
        receiver
    }

    pub async fn deregister_consumer(&self, name: &str) {
        self.consumers.write().await.remove(name);
    }

    pub async fn consumer_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.consumers.read().await.keys().cloned().collect();
        names.sort();
        names
    }
}

#[async_trait]
impl MessageQueue for LocalMessageQueue {
    async fn publish(&self, message: QueueMessage) -> Result<(), QueueError> {
        let consumers = self.consumers.read().await;
        let sender = consumers
            .get(&message.message_type)
            .ok_or_else(|| QueueError::NoConsumer(message.message_type.clone()))?;

        let destination = message.message_type.clone();
        tracing::trace!(destination = %destination, message_id = %message.id, "publishing message");
        sender
            .send(message)
            .map_err(|_| QueueError::Closed(destination))
    }
}
