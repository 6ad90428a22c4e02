// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Wire types exchanged between the pipeline and remote services.

mod action;
mod queue_message;
mod task;

pub use action::ActionType;
pub use queue_message::QueueMessage;
pub use task::{ChatMessage, TaskDefinition, TaskFailure, TaskResult, ERROR_KEY, INPUT_DICT_KEY};

/// Named local values accumulated for a node. Insertion order is preserved.
pub type InputMap = serde_json::Map<String, serde_json::Value>;

/// Named output fields a node hands back to the engine.
pub type OutputMap = serde_json::Map<String, serde_json::Value>;

/// Input key every agent node exposes.
pub const AGENT_INPUT_KEY: &str = "input";

/// Output key every agent node exposes.
pub const AGENT_OUTPUT_KEY: &str = "output";
