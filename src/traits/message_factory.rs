use crate::errors::BridgeError;
use crate::types::{QueueMessage, TaskDefinition};

/// Builds the queue envelope for a task.
///
/// Injected into the outbound translator so translation can be tested without a
/// transport.
pub trait MessageFactory: Send + Sync {
    /// Wrap `task` in a `NEW_TASK` message addressed to `destination`.
    fn task_message(
        &self,
        destination: &str,
        task: &TaskDefinition,
    ) -> Result<QueueMessage, BridgeError>;
}
