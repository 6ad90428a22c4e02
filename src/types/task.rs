// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::types::InputMap;

/// Reserved `state` key under which a component node's full input mapping travels.
pub const INPUT_DICT_KEY: &str = "__input_dict__";

/// Completion field a service sets instead of a result when the task failed.
pub const ERROR_KEY: &str = "error";

/// A unit of work sent to a remote service.
///
/// Agents read the single textual `input`. Components ignore `input` and rebuild their
/// multi-field input from `state[INPUT_DICT_KEY]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDefinition {
    pub task_id: String,
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub state: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub agent_id: Option<String>,
}

impl TaskDefinition {
    /// Task carrying one textual input and no state.
    pub fn agent(task_id: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            input: input.into(),
            state: serde_json::Map::new(),
            agent_id: None,
        }
    }

    /// Task carrying a full input mapping nested under [`INPUT_DICT_KEY`].
    pub fn component(task_id: impl Into<String>, input: &InputMap) -> Self {
        let mut state = serde_json::Map::new();
        state.insert(
            INPUT_DICT_KEY.to_string(),
            serde_json::Value::Object(input.clone()),
        );
        Self {
            task_id: task_id.into(),
            input: String::new(),
            state,
            agent_id: None,
        }
    }

    /// The nested component input, if this task carries one.
    pub fn component_input(&self) -> Option<&InputMap> {
        self.state.get(INPUT_DICT_KEY).and_then(|v| v.as_object())
    }
}

/// One turn of conversation history, as services usually write it.
///
/// The bridge never requires history entries to have this shape; see
/// [`TaskResult::chat_turns`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: Some(content.into()),
        }
    }
}

/// A remote service's reply to a [`TaskDefinition`].
///
/// `result` is the canonical output of agents, `data` the canonical output of
/// components. Both may be populated. `history` is carried as raw JSON and never
/// inspected on delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    pub task_id: String,
    #[serde(default)]
    pub history: Vec<serde_json::Value>,
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl TaskResult {
    /// History entries that read as [`ChatMessage`]s, skipping any that do not.
    pub fn chat_turns(&self) -> Vec<ChatMessage> {
        self.history
            .iter()
            .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
            .collect()
    }
}

/// A service's report that it could not complete a task.
///
/// Travels as the `data` of a `COMPLETED_TASK` message in place of a [`TaskResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskFailure {
    #[serde(default)]
    pub task_id: String,
    pub error: String,
}
