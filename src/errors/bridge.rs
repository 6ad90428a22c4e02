// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while translating between the pipeline and the message queue.

use thiserror::Error;

use crate::errors::QueueError;

/// Errors produced by the outbound and inbound translators and by the orchestrator
/// that drives them.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// A node carries a classification outside the closed `{agent, component}` set.
    ///
    /// This is a configuration defect. It is never defaulted or retried.
    #[error("Service component '{node_name}' has invalid module type '{value}'")]
    InvalidClassification { node_name: String, value: String },

    /// The run state holds no descriptor for the node.
    #[error("No service component named '{0}' in run state")]
    UnknownNode(String),

    /// An agent node was dispatched with an empty input mapping.
    #[error("Agent service component '{node_name}' requires at least one input value")]
    MissingAgentInput { node_name: String },

    /// A task definition or result could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A queue message did not have the shape of a task completion.
    #[error("Malformed queue message: {reason}")]
    MalformedMessage { reason: String },

    /// A service answered a task with a failure report instead of a result.
    #[error("Service '{node_name}' failed task: {reason}")]
    ServiceFailed { node_name: String, reason: String },

    /// The transport refused or lost a message.
    #[error(transparent)]
    Queue(#[from] QueueError),
}
