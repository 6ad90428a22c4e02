// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Service backends that answer task messages.
//!
//! # Available Backends
//!
//! ## Loopback Backend
//! In-process services that consume `NEW_TASK` messages from a
//! [`crate::queue::LocalMessageQueue`] and reply with `COMPLETED_TASK` messages:
//! - **Agent**: echoes its input prefixed with the service name
//! - **Component**: returns its input fields plus a `processed_by` marker
//! - **Use Case**: demos, end-to-end tests, wiring checks before real services exist
//!
//! # Examples
//!
//! ```rust
//! use pipeline_bridge::backends::LoopbackService;
//! use pipeline_bridge::component::{ModuleType, ServiceComponent};
//! use pipeline_bridge::types::TaskDefinition;
//!
//! let service = LoopbackService::new(
//!     ServiceComponent::new("echo", "", Some(ModuleType::Agent)),
//!     "control_plane",
//! );
//! let result = service.handle(&TaskDefinition::agent("t1", "ping"))?;
//! assert_eq!(result.result, "echo: ping");
//! # Ok::<(), pipeline_bridge::errors::BridgeError>(())
//! ```

pub mod loopback;

pub use loopback::LoopbackService;
