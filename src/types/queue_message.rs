// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::ActionType;

/// Envelope placed on the message queue.
///
/// `message_type` is the destination: the queue routes every message to the consumer
/// registered under that name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueMessage {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub publisher_id: Option<String>,
    #[serde(rename = "type")]
    pub message_type: String,
    #[serde(default)]
    pub action: Option<ActionType>,
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl QueueMessage {
    pub fn new(
        message_type: impl Into<String>,
        action: ActionType,
        data: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            publisher_id: None,
            message_type: message_type.into(),
            action: Some(action),
            data,
        }
    }

    pub fn with_publisher(mut self, publisher_id: impl Into<String>) -> Self {
        self.publisher_id = Some(publisher_id.into());
        self
    }
}
