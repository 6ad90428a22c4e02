// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::Instrument;

use crate::bridge::{QueueMessageFactory, ServiceBridge};
use crate::component::ServiceComponent;
use crate::engine::{DependencyEngine, RunState};
use crate::errors::{BridgeError, QueueError};
use crate::observability::messages::engine::{NodesDispatched, RunCompleted, RunFailed, RunStarted};
use crate::observability::messages::StructuredLog;
use crate::traits::{MessageFactory, MessageQueue};
use crate::types::{ActionType, InputMap, OutputMap, QueueMessage, TaskResult, ERROR_KEY};

/// Control loop between a [`DependencyEngine`] and a message queue.
///
/// One in-flight task per node: a node is marked dispatched before its message is
/// handed out and is never offered again. Replies are matched to nodes by the
/// `publisher_id` of their `COMPLETED_TASK` message.
pub struct PipelineOrchestrator<F: MessageFactory = QueueMessageFactory> {
    engine: DependencyEngine,
    bridge: ServiceBridge<F>,
}

impl<F: MessageFactory> PipelineOrchestrator<F> {
    pub fn new(engine: DependencyEngine, bridge: ServiceBridge<F>) -> Self {
        Self { engine, bridge }
    }

    pub fn engine(&self) -> &DependencyEngine {
        &self.engine
    }

    pub fn bridge(&self) -> &ServiceBridge<F> {
        &self.bridge
    }

    /// Fresh run state whose entry nodes all start from `input`.
    pub fn start(
        &self,
        components: impl IntoIterator<Item = ServiceComponent>,
        input: InputMap,
    ) -> RunState {
        let mut run_state = RunState::new(components);
        for entry in self.engine.entry_points() {
            run_state.set_input(entry, input.clone());
        }
        run_state
    }

    /// Task messages for every node that just became ready.
    ///
    /// Either all ready nodes are translated and marked dispatched, or none are.
    pub fn next_messages(
        &self,
        run_state: &mut RunState,
        task_id: &str,
    ) -> Result<Vec<QueueMessage>, BridgeError> {
        let ready = self.engine.ready_nodes(run_state);
        if ready.is_empty() {
            return Ok(Vec::new());
        }

        let empty = InputMap::new();
        let mut messages = Vec::with_capacity(ready.len());
        for node_name in &ready {
            let component = run_state
                .component(node_name)
                .ok_or_else(|| BridgeError::UnknownNode(node_name.clone()))?;
            let input = run_state.input(node_name).unwrap_or(&empty);
            messages.push(self.bridge.submit(component, task_id, input)?);
        }

        for node_name in &ready {
            run_state.mark_dispatched(node_name);
        }
        NodesDispatched {
            task_id,
            node_names: &ready,
        }
        .log();

        Ok(messages)
    }

    /// Apply a `COMPLETED_TASK` message to the run. Returns the node it completed.
    ///
    /// A completion carrying an `error` field is a failure report and ends in
    /// [`BridgeError::ServiceFailed`] without touching the run state.
    pub fn add_result(
        &self,
        run_state: &mut RunState,
        message: QueueMessage,
    ) -> Result<String, BridgeError> {
        if message.action != Some(ActionType::CompletedTask) {
            return Err(BridgeError::MalformedMessage {
                reason: format!("expected COMPLETED_TASK, got {:?}", message.action),
            });
        }
        let node_name = message.publisher_id.ok_or_else(|| BridgeError::MalformedMessage {
            reason: "completion message has no publisher_id".to_string(),
        })?;
        if let Some(error) = message.data.get(ERROR_KEY) {
            let reason = match error {
                serde_json::Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            return Err(BridgeError::ServiceFailed { node_name, reason });
        }
        let result: TaskResult = serde_json::from_value(serde_json::Value::Object(message.data))?;

        self.bridge
            .deliver(&self.engine, run_state, &node_name, result)?;
        Ok(node_name)
    }

    pub fn is_complete(&self, run_state: &RunState) -> bool {
        self.engine.is_complete(run_state)
    }

    /// Run the pipeline to completion over `queue`, reading replies from `results`.
    ///
    /// Returns the outputs of the pipeline's sink nodes.
    pub async fn run<Q: MessageQueue + ?Sized>(
        &self,
        queue: &Q,
        results: &mut mpsc::UnboundedReceiver<QueueMessage>,
        run_state: RunState,
        task_id: &str,
    ) -> Result<BTreeMap<String, OutputMap>, BridgeError> {
        let start_msg = RunStarted {
            task_id,
            node_count: self.engine.graph().len(),
            entry_count: self.engine.entry_points().len(),
        };
        let span = start_msg.span("pipeline_run");
        span.in_scope(|| start_msg.log());
        let started = Instant::now();

        let outcome = self
            .drive(queue, results, run_state, task_id)
            .instrument(span.clone())
            .await;

        let _guard = span.enter();
        match outcome {
            Ok(run_state) => {
                RunCompleted {
                    task_id,
                    node_count: run_state.executed_count(),
                    duration: started.elapsed(),
                }
                .log();
                Ok(run_state.into_final_outputs())
            }
            Err(e) => {
                RunFailed {
                    task_id,
                    error: &e,
                }
                .log();
                Err(e)
            }
        }
    }

    async fn drive<Q: MessageQueue + ?Sized>(
        &self,
        queue: &Q,
        results: &mut mpsc::UnboundedReceiver<QueueMessage>,
        mut run_state: RunState,
        task_id: &str,
    ) -> Result<RunState, BridgeError> {
        loop {
            for message in self.next_messages(&mut run_state, task_id)? {
                queue.publish(message).await?;
            }
            if self.is_complete(&run_state) {
                return Ok(run_state);
            }

            let message = results
                .recv()
                .await
                .ok_or_else(|| QueueError::Closed("results".to_string()))?;
            self.add_result(&mut run_state, message)?;
        }
    }
}
