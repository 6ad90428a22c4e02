// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Outbound translation: a node's local input becomes a `NEW_TASK` message.

use crate::component::{ModuleType, ServiceComponent};
use crate::errors::BridgeError;
use crate::observability::messages::bridge::{ClassificationRejected, TaskSubmitted};
use crate::observability::messages::StructuredLog;
use crate::traits::MessageFactory;
use crate::types::{InputMap, QueueMessage, TaskDefinition};

/// Build the task message for `component` from its current `input`.
///
/// * Agent (or no module type): the task's `input` is the first inserted value of
///   `input`, and `state` is empty. An empty `input` is rejected.
/// * Component: the task's `input` is empty and the whole `input` mapping travels in
///   `state` under [`crate::types::INPUT_DICT_KEY`].
///
/// The message is addressed to `component.name()` and is not enqueued. On any error the
/// factory is never called.
///
/// # Examples
/// ```
/// use pipeline_bridge::bridge::{outbound::submit, QueueMessageFactory};
/// use pipeline_bridge::component::{ModuleType, ServiceComponent};
/// use pipeline_bridge::types::InputMap;
///
/// let component = ServiceComponent::new("AgentService", "", Some(ModuleType::Agent));
/// let mut input = InputMap::new();
/// input.insert("key".into(), "value".into());
///
/// let message = submit(&QueueMessageFactory::new(), &component, "task123", &input).unwrap();
/// assert_eq!(message.message_type, "AgentService");
/// assert_eq!(message.data["input"], "value");
/// ```
pub fn submit<F: MessageFactory + ?Sized>(
    factory: &F,
    component: &ServiceComponent,
    task_id: &str,
    input: &InputMap,
) -> Result<QueueMessage, BridgeError> {
    let module_type = component.resolve_module_type().map_err(|e| {
        ClassificationRejected {
            node_name: component.name(),
            direction: "submit",
            error: &e,
        }
        .log();
        e
    })?;

    let submitted = TaskSubmitted {
        node_name: component.name(),
        task_id,
        module_type: module_type.as_str(),
    };
    let span = submitted.span("task_submission");
    let _guard = span.enter();

    let task = task_definition(module_type, component, task_id, input)?;
    let message = factory.task_message(component.name(), &task)?;
    submitted.log();

    Ok(message)
}

/// Shape the task definition for a resolved module type.
pub fn task_definition(
    module_type: ModuleType,
    component: &ServiceComponent,
    task_id: &str,
    input: &InputMap,
) -> Result<TaskDefinition, BridgeError> {
    match module_type {
        ModuleType::Agent => {
            let text = first_input_text(input).ok_or_else(|| BridgeError::MissingAgentInput {
                node_name: component.name().to_string(),
            })?;
            Ok(TaskDefinition::agent(task_id, text))
        }
        ModuleType::Component => Ok(TaskDefinition::component(task_id, input)),
    }
}

/// The agent input: the first inserted value, strings verbatim and anything else as
/// compact JSON.
fn first_input_text(input: &InputMap) -> Option<String> {
    input.values().next().map(|value| match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    })
}
