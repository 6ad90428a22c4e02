// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::errors::ConfigError;

/// Queue consumer that receives `COMPLETED_TASK` messages when the config names none.
pub const DEFAULT_CONTROL_PLANE: &str = "control_plane";

/// Main configuration structure for a bridged pipeline.
///
/// Describes the remote services that make up the pipeline, how they depend on each
/// other, and where their replies go. It is typically loaded from a YAML file.
///
/// # Fields
/// * `control_plane` - Consumer name for completion messages (defaults to `control_plane`)
/// * `publisher_id` - Sender name stamped on outgoing task messages (optional)
/// * `services` - The service nodes of the pipeline
///
/// # Example
/// ```yaml
/// control_plane: control_plane
/// publisher_id: pipeline_orchestrator
/// services:
///   - name: researcher
///     description: Finds facts
///     module_type: agent
///   - name: formatter
///     module_type: component
///     input_keys: [output]
///     output_keys: [document]
///     depends_on: [researcher]
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_control_plane")]
    pub control_plane: String,
    #[serde(default)]
    pub publisher_id: Option<String>,
    pub services: Vec<ServiceConfig>,
}

fn default_control_plane() -> String {
    DEFAULT_CONTROL_PLANE.to_string()
}

/// Configuration for a single service node.
///
/// `module_type` is kept as written so validation can report unsupported values by
/// name; it is parsed into [`crate::component::ModuleType`] when the runtime is built.
/// Leaving it out makes the node an agent.
///
/// # Example
/// ```yaml
/// name: formatter
/// description: Lays out the final document
/// module_type: component
/// input_keys: [output]
/// output_keys: [document]
/// depends_on: [researcher]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub module_type: Option<String>,
    #[serde(default)]
    pub input_keys: Vec<String>,
    #[serde(default)]
    pub output_keys: Vec<String>,
    #[serde(default)]
    pub depends_on: Vec<String>,
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file
///
/// Validation covers service name uniqueness, dependency references, cycles and module
/// types; see [`crate::config::validate_pipeline`].
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_pipeline(&cfg).map_err(ConfigError::Validation)?;
    Ok(cfg)
}
