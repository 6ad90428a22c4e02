use async_trait::async_trait;

use crate::errors::QueueError;
use crate::types::QueueMessage;

/// Transport that delivers queue messages to the consumer named by their `type`.
#[async_trait]
pub trait MessageQueue: Send + Sync {
    async fn publish(&self, message: QueueMessage) -> Result<(), QueueError>;
}
