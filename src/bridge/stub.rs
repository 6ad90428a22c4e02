// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Test doubles for the bridge's collaborators.

use std::sync::Mutex;

use crate::bridge::QueueMessageFactory;
use crate::engine::RunState;
use crate::errors::BridgeError;
use crate::traits::{MessageFactory, PipelineEngine};
use crate::types::{OutputMap, QueueMessage, TaskDefinition};

/// Message factory that remembers every task it was asked to wrap.
#[derive(Default)]
pub struct RecordingFactory {
    pub calls: Mutex<Vec<(String, TaskDefinition)>>,
}

impl RecordingFactory {
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl MessageFactory for RecordingFactory {
    fn task_message(
        &self,
        destination: &str,
        task: &TaskDefinition,
    ) -> Result<QueueMessage, BridgeError> {
        self.calls
            .lock()
            .unwrap()
            .push((destination.to_string(), task.clone()));
        QueueMessageFactory::new().task_message(destination, task)
    }
}

/// Engine that records `record_output` calls and touches nothing else.
#[derive(Default)]
pub struct RecordingEngine {
    pub calls: Mutex<Vec<(OutputMap, String)>>,
}

impl RecordingEngine {
    pub fn calls(&self) -> Vec<(OutputMap, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl PipelineEngine for RecordingEngine {
    fn record_output(&self, output: OutputMap, node_name: &str, _run_state: &mut RunState) {
        self.calls
            .lock()
            .unwrap()
            .push((output, node_name.to_string()));
    }
}
