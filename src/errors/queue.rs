// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Transport-level failures of a message queue.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueueError {
    /// Nothing is registered to consume messages of this type.
    #[error("No consumer registered for message type '{0}'")]
    NoConsumer(String),

    /// The channel behind a consumer or the result stream has been dropped.
    #[error("Channel for '{0}' is closed")]
    Closed(String),
}
