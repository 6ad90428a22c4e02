// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline runs.
//!
//! This module contains message types for logging events related to:
//! * Pipeline run lifecycle (start, completion, failure)
//! * Dispatch of ready nodes
//! * Outputs recorded into the run state

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Pipeline run started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use pipeline_bridge::observability::messages::engine::RunStarted;
///
/// let msg = RunStarted {
///     task_id: "task123",
///     node_count: 3,
///     entry_count: 1,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RunStarted<'a> {
    pub task_id: &'a str,
    pub node_count: usize,
    pub entry_count: usize,
}

impl Display for RunStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting pipeline run {}: {} service nodes, {} entry points",
            self.task_id, self.node_count, self.entry_count
        )
    }
}

impl StructuredLog for RunStarted<'_> {
    fn log(&self) {
        tracing::info!(
            task_id = self.task_id,
            node_count = self.node_count,
            entry_count = self.entry_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_run",
            span_name = name,
            task_id = self.task_id,
            node_count = self.node_count,
        )
    }
}

/// Pipeline run finished with every node executed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RunCompleted<'a> {
    pub task_id: &'a str,
    pub node_count: usize,
    pub duration: std::time::Duration,
}

impl Display for RunCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline run {} completed: {} nodes in {:?}",
            self.task_id, self.node_count, self.duration
        )
    }
}

impl StructuredLog for RunCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            task_id = self.task_id,
            node_count = self.node_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_run_completed",
            span_name = name,
            task_id = self.task_id,
            duration = ?self.duration,
        )
    }
}

/// Pipeline run aborted.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct RunFailed<'a> {
    pub task_id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for RunFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Pipeline run {} failed: {}", self.task_id, self.error)
    }
}

impl StructuredLog for RunFailed<'_> {
    fn log(&self) {
        tracing::error!(task_id = self.task_id, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "pipeline_run_failed",
            span_name = name,
            task_id = self.task_id,
            error = %self.error,
        )
    }
}

/// Ready nodes were dispatched to their services.
///
/// # Log Level
/// `info!` - Important operational event
pub struct NodesDispatched<'a> {
    pub task_id: &'a str,
    pub node_names: &'a [String],
}

impl Display for NodesDispatched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dispatched {} node(s) for run {}: [{}]",
            self.node_names.len(),
            self.task_id,
            self.node_names.join(", ")
        )
    }
}

impl StructuredLog for NodesDispatched<'_> {
    fn log(&self) {
        tracing::info!(
            task_id = self.task_id,
            dispatched = self.node_names.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "nodes_dispatched",
            span_name = name,
            task_id = self.task_id,
            dispatched = self.node_names.len(),
        )
    }
}

/// The engine recorded a node's output.
///
/// # Log Level
/// `debug!` - Per-node operational detail
///
/// # Example
/// ```
/// use pipeline_bridge::observability::messages::engine::OutputRecorded;
///
/// let msg = OutputRecorded {
///     node_name: "researcher",
///     dependent_count: 2,
///     field_count: 1,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct OutputRecorded<'a> {
    pub node_name: &'a str,
    pub dependent_count: usize,
    pub field_count: usize,
}

impl Display for OutputRecorded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.dependent_count == 0 {
            write!(
                f,
                "Recorded final output of '{}': {} field(s)",
                self.node_name, self.field_count
            )
        } else {
            write!(
                f,
                "Recorded output of '{}': {} field(s) forwarded to {} dependent(s)",
                self.node_name, self.field_count, self.dependent_count
            )
        }
    }
}

impl StructuredLog for OutputRecorded<'_> {
    fn log(&self) {
        tracing::debug!(
            node_name = self.node_name,
            dependent_count = self.dependent_count,
            field_count = self.field_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "output_recorded",
            span_name = name,
            node_name = self.node_name,
        )
    }
}
