// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors that can occur during pipeline configuration validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A circular dependency was detected between services
    #[error("Cyclic dependency detected: {}", .cycle.join(" -> "))]
    CyclicDependency {
        /// The cycle path showing the circular dependency
        cycle: Vec<String>,
    },
    /// A service references a dependency that doesn't exist
    #[error("Service '{service_name}' depends on '{missing_dependency}' which does not exist")]
    UnresolvedDependency {
        service_name: String,
        missing_dependency: String,
    },
    /// Two services share a name, so the queue destination would be ambiguous
    #[error("Duplicate service name: '{service_name}'")]
    DuplicateServiceName { service_name: String },
    /// A service declares a module type the bridge cannot translate
    #[error("Service '{service_name}' has unsupported module type '{value}' (expected 'agent' or 'component')")]
    InvalidModuleType { service_name: String, value: String },
    /// A service would share its queue consumer with the control plane
    #[error("Service '{service_name}' uses the control plane name as its queue destination")]
    ControlPlaneNameCollision { service_name: String },
}

/// Errors returned while loading a pipeline configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let cycle = ValidationError::CyclicDependency {
            cycle: vec!["a".into(), "b".into(), "a".into()],
        };
        assert_eq!(cycle.to_string(), "Cyclic dependency detected: a -> b -> a");

        let invalid = ValidationError::InvalidModuleType {
            service_name: "writer".into(),
            value: "robot".into(),
        };
        assert!(invalid.to_string().contains("'robot'"));
    }

    #[test]
    fn test_config_error_joins_validation_errors() {
        let err = ConfigError::Validation(vec![
            ValidationError::DuplicateServiceName {
                service_name: "a".into(),
            },
            ValidationError::UnresolvedDependency {
                service_name: "b".into(),
                missing_dependency: "c".into(),
            },
        ]);
        let msg = err.to_string();
        assert!(msg.starts_with("Configuration validation failed:"));
        assert!(msg.contains("Duplicate service name: 'a'"));
        assert!(msg.contains("depends on 'c' which does not exist"));
    }
}
