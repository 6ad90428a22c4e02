// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod bridge;
mod config;
mod queue;

pub use bridge::BridgeError;
pub use config::{ConfigError, ValidationError};
pub use queue::QueueError;
