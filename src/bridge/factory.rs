// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::BridgeError;
use crate::traits::MessageFactory;
use crate::types::{ActionType, QueueMessage, TaskDefinition};

/// Default [`MessageFactory`]: serializes the task definition into the message data and
/// stamps a fresh envelope id.
#[derive(Debug, Clone, Default)]
pub struct QueueMessageFactory {
    publisher_id: Option<String>,
}

impl QueueMessageFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages built by this factory carry `publisher_id` as their sender.
    pub fn with_publisher(publisher_id: impl Into<String>) -> Self {
        Self {
            publisher_id: Some(publisher_id.into()),
        }
    }
}

impl MessageFactory for QueueMessageFactory {
    fn task_message(
        &self,
        destination: &str,
        task: &TaskDefinition,
    ) -> Result<QueueMessage, BridgeError> {
        let data = match serde_json::to_value(task)? {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(BridgeError::MalformedMessage {
                    reason: format!("task definition serialized to non-object: {}", other),
                })
            }
        };

        let message = QueueMessage::new(destination, ActionType::NewTask, data);
        Ok(match &self.publisher_id {
            Some(publisher_id) => message.with_publisher(publisher_id.clone()),
            None => message,
        })
    }
}
