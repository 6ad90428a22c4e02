// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::component::{ModuleType, ServiceComponent};
use crate::errors::BridgeError;
use crate::traits::MessageQueue;
use crate::types::{
    ActionType, ChatMessage, OutputMap, QueueMessage, TaskDefinition, TaskFailure, TaskResult,
};

/// Field a loopback component adds to its output to say who produced it.
pub const PROCESSED_BY_KEY: &str = "processed_by";

/// In-process stand-in for a remote service.
///
/// Consumes `NEW_TASK` messages addressed to its descriptor's name and answers each with a
/// `COMPLETED_TASK` message to the control plane:
/// - Agent: `result` is `"<name>: <input>"`, `data` is empty
/// - Component: `data` is the component input plus `processed_by`, `result` is empty
/// - Undecodable task or unusable descriptor: a [`TaskFailure`] report
pub struct LoopbackService {
    component: ServiceComponent,
    control_plane: String,
}

impl LoopbackService {
    pub fn new(component: ServiceComponent, control_plane: impl Into<String>) -> Self {
        Self {
            component,
            control_plane: control_plane.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.component.name()
    }

    /// Compute the reply to one task.
    pub fn handle(&self, task: &TaskDefinition) -> Result<TaskResult, BridgeError> {
        let name = self.component.name();
        match self.component.resolve_module_type()? {
            ModuleType::Agent => {
                let reply = format!("{}: {}", name, task.input);
                Ok(TaskResult {
                    task_id: task.task_id.clone(),
                    history: vec![
                        serde_json::to_value(ChatMessage::new("user", task.input.as_str()))?,
                        serde_json::to_value(ChatMessage::new("assistant", reply.as_str()))?,
                    ],
                    result: reply,
                    data: OutputMap::new(),
                })
            }
            ModuleType::Component => {
                let mut data = task.component_input().cloned().unwrap_or_default();
                data.insert(
                    PROCESSED_BY_KEY.to_string(),
                    serde_json::Value::String(name.to_string()),
                );
                Ok(TaskResult {
                    task_id: task.task_id.clone(),
                    history: vec![],
                    result: String::new(),
                    data,
                })
            }
        }
    }

    /// Wrap `result` in a `COMPLETED_TASK` message from this service to the control plane.
    pub fn completion_message(&self, result: &TaskResult) -> Result<QueueMessage, BridgeError> {
        self.envelope(serde_json::to_value(result)?)
    }

    /// Report that the task `task_id` could not be completed.
    pub fn failure_message(
        &self,
        task_id: &str,
        error: &BridgeError,
    ) -> Result<QueueMessage, BridgeError> {
        self.envelope(serde_json::to_value(TaskFailure {
            task_id: task_id.to_string(),
            error: error.to_string(),
        })?)
    }

    fn envelope(&self, payload: serde_json::Value) -> Result<QueueMessage, BridgeError> {
        let data = match payload {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(BridgeError::MalformedMessage {
                    reason: format!("reply serialized to non-object: {}", other),
                })
            }
        };
        Ok(
            QueueMessage::new(self.control_plane.as_str(), ActionType::CompletedTask, data)
                .with_publisher(self.component.name()),
        )
    }

    /// Serve tasks from `receiver` until it closes or the queue refuses a reply.
    ///
    /// Every task gets exactly one reply: a completion, or a failure report when the task
    /// cannot be decoded or handled.
    pub fn spawn<Q: MessageQueue + 'static>(
        self,
        queue: Arc<Q>,
        mut receiver: mpsc::UnboundedReceiver<QueueMessage>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            while let Some(message) = receiver.recv().await {
                if message.action != Some(ActionType::NewTask) {
                    tracing::debug!(service = self.name(), action = ?message.action, "ignoring message");
                    continue;
                }

                let task_id = message
                    .data
                    .get("task_id")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or_default()
                    .to_string();

                let reply = serde_json::from_value::<TaskDefinition>(serde_json::Value::Object(message.data))
                    .map_err(BridgeError::from)
                    .and_then(|task| self.handle(&task))
                    .and_then(|result| self.completion_message(&result))
                    .or_else(|e| {
                        tracing::warn!(service = self.name(), task_id = %task_id, error = %e, "task failed");
                        self.failure_message(&task_id, &e)
                    });

                let reply = match reply {
                    Ok(reply) => reply,
                    Err(e) => {
                        tracing::error!(service = self.name(), error = %e, "failed to build reply");
                        continue;
                    }
                };

                if let Err(e) = queue.publish(reply).await {
                    tracing::error!(service = self.name(), error = %e, "failed to publish reply");
                    break;
                }
            }
        })
    }
}
