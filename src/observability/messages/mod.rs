// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `bridge` - Outbound and inbound translation events
//! * `engine` - Reference engine and orchestrator events
//! * `validation` - Configuration validation warnings and errors

use tracing::Span;

pub mod bridge;
pub mod engine;
pub mod validation;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message at its level, with its fields attached.
    fn log(&self);

    /// A span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
