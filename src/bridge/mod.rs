// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Translation between the pipeline and the message queue.
//!
//! ```text
//! engine reaches node N ──▶ outbound::submit ──▶ QueueMessage (NEW_TASK) ──▶ queue
//!                                                                              │
//! engine.record_output ◀── inbound::deliver ◀── TaskResult ◀── remote service ◀┘
//! ```
//!
//! Both directions resolve the node's module type through
//! [`crate::component::ServiceComponent::resolve_module_type`], so a node without a
//! module type is treated as an agent on the way out and on the way back.

pub mod factory;
pub mod inbound;
pub mod outbound;

#[cfg(test)]
pub(crate) mod stub;

pub use factory::QueueMessageFactory;

use crate::component::ServiceComponent;
use crate::engine::RunState;
use crate::errors::BridgeError;
use crate::traits::{MessageFactory, PipelineEngine};
use crate::types::{InputMap, QueueMessage, TaskResult};

/// Both translators bound to one message factory.
pub struct ServiceBridge<F: MessageFactory = QueueMessageFactory> {
    factory: F,
}

impl<F: MessageFactory> ServiceBridge<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// See [`outbound::submit`].
    pub fn submit(
        &self,
        component: &ServiceComponent,
        task_id: &str,
        input: &InputMap,
    ) -> Result<QueueMessage, BridgeError> {
        outbound::submit(&self.factory, component, task_id, input)
    }

    /// See [`inbound::deliver`].
    pub fn deliver<E: PipelineEngine + ?Sized>(
        &self,
        engine: &E,
        run_state: &mut RunState,
        node_name: &str,
        result: TaskResult,
    ) -> Result<(), BridgeError> {
        inbound::deliver(engine, run_state, node_name, result)
    }
}

impl Default for ServiceBridge<QueueMessageFactory> {
    fn default() -> Self {
        Self::new(QueueMessageFactory::new())
    }
}
