// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the pipeline/queue boundary.
//!
//! This module contains message types for logging events related to:
//! * Building task messages for remote services
//! * Extracting remote results and recording them with the engine
//! * Rejected classifications

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A task message was built for a remote service.
///
/// # Log Level
/// `debug!` - Per-node operational detail
///
/// # Example
/// ```
/// use pipeline_bridge::observability::messages::bridge::TaskSubmitted;
///
/// let msg = TaskSubmitted {
///     node_name: "ComponentService",
///     task_id: "task123",
///     module_type: "component",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct TaskSubmitted<'a> {
    pub node_name: &'a str,
    pub task_id: &'a str,
    pub module_type: &'a str,
}

impl Display for TaskSubmitted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Built NEW_TASK message for {} service '{}' (task_id={})",
            self.module_type, self.node_name, self.task_id
        )
    }
}

impl StructuredLog for TaskSubmitted<'_> {
    fn log(&self) {
        tracing::debug!(
            node_name = self.node_name,
            task_id = self.task_id,
            module_type = self.module_type,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "task_submitted",
            span_name = name,
            node_name = self.node_name,
            task_id = self.task_id,
            module_type = self.module_type,
        )
    }
}

/// A task result was translated and handed to the engine.
///
/// # Log Level
/// `debug!` - Per-node operational detail
pub struct ResultDelivered<'a> {
    pub node_name: &'a str,
    pub task_id: &'a str,
    pub module_type: &'a str,
    pub field_count: usize,
}

impl Display for ResultDelivered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Delivered {} result for '{}' (task_id={}): {} output field(s)",
            self.module_type, self.node_name, self.task_id, self.field_count
        )
    }
}

impl StructuredLog for ResultDelivered<'_> {
    fn log(&self) {
        tracing::debug!(
            node_name = self.node_name,
            task_id = self.task_id,
            module_type = self.module_type,
            field_count = self.field_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "result_delivered",
            span_name = name,
            node_name = self.node_name,
            task_id = self.task_id,
            module_type = self.module_type,
        )
    }
}

/// A translation was refused because of a node's classification.
///
/// # Log Level
/// `error!` - Configuration defect requiring attention
///
/// # Example
/// ```
/// use pipeline_bridge::observability::messages::bridge::ClassificationRejected;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "invalid module type");
/// let msg = ClassificationRejected {
///     node_name: "AgentService",
///     direction: "submit",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ClassificationRejected<'a> {
    pub node_name: &'a str,
    /// `submit` or `deliver`
    pub direction: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ClassificationRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Refusing to {} for '{}': {}",
            self.direction, self.node_name, self.error
        )
    }
}

impl StructuredLog for ClassificationRejected<'_> {
    fn log(&self) {
        tracing::error!(
            node_name = self.node_name,
            direction = self.direction,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "classification_rejected",
            span_name = name,
            node_name = self.node_name,
            direction = self.direction,
            error = %self.error,
        )
    }
}
