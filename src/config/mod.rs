// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod dependency_graph;
mod loader;
mod runtime;
mod validation;


pub use dependency_graph::DependencyGraph;
pub use loader::{
    load_and_validate_config, load_config, Config, ServiceConfig, DEFAULT_CONTROL_PLANE,
};
pub use runtime::RuntimeBuilder;
pub use validation::validate_pipeline;
