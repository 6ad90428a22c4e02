// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Node descriptors for pipeline nodes that stand in for remote services.

mod module_type;
mod service_component;

pub use module_type::{ModuleType, UnknownModuleType};
pub use service_component::ServiceComponent;
