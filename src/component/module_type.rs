// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a remote service's input and output must be shaped.
///
/// # Variants
/// * `Agent` - Conversational service: one textual input, one textual `result`
/// * `Component` - Computational service: named input fields in, named `data` fields out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleType {
    /// Also the resolution for descriptors that carry no module type at all.
    #[default]
    Agent,
    Component,
}

impl ModuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleType::Agent => "agent",
            ModuleType::Component => "component",
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A module type tag outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModuleType(pub String);

impl fmt::Display for UnknownModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown module type '{}'", self.0)
    }
}

impl std::error::Error for UnknownModuleType {}

impl FromStr for ModuleType {
    type Err = UnknownModuleType;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "agent" => Ok(ModuleType::Agent),
            "component" => Ok(ModuleType::Component),
            _ => Err(UnknownModuleType(s.to_string())),
        }
    }
}
