// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Every diagnostic event the bridge emits is a small struct with a `Display`
//! implementation, so message text lives in one place instead of being scattered as
//! format strings.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::bridge` - Task submission and result delivery
//! * `messages::engine` - Run state progression and pipeline runs
//! * `messages::validation` - Configuration validation outcomes
//!
//! # Usage
//!
//! ```rust
//! use pipeline_bridge::observability::messages::bridge::TaskSubmitted;
//! use pipeline_bridge::observability::messages::StructuredLog;
//!
//! let msg = TaskSubmitted {
//!     node_name: "summarizer",
//!     task_id: "task123",
//!     module_type: "agent",
//! };
//!
//! msg.log();
//! ```

pub mod messages;
