// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation for pipeline integrity.
//!
//! Checks run in this order:
//!
//! 1. **Uniqueness**: every service name appears once, since it doubles as the queue
//!    destination
//! 2. **References**: every `depends_on` entry names a declared service
//! 3. **Module types**: every declared `module_type` parses as `agent` or `component`
//! 4. **Control plane**: no service is named after the control plane consumer
//! 5. **Cycles**: DFS with a recursion stack, reporting the cycle path
//!
//! Cycle detection only runs when the references resolve. All other problems are
//! accumulated so a single pass reports everything wrong with a file.
//!
//! # Examples
//!
//! ```rust
//! use pipeline_bridge::config::{validate_pipeline, Config, ServiceConfig};
//! use pipeline_bridge::errors::ValidationError;
//!
//! let service = |name: &str, deps: &[&str]| ServiceConfig {
//!     name: name.to_string(),
//!     description: String::new(),
//!     module_type: None,
//!     input_keys: vec![],
//!     output_keys: vec![],
//!     depends_on: deps.iter().map(|d| d.to_string()).collect(),
//! };
//!
//! let config = Config {
//!     control_plane: "control_plane".to_string(),
//!     publisher_id: None,
//!     services: vec![service("a", &["ghost"])],
//! };
//!
//! let errors = validate_pipeline(&config).unwrap_err();
//! assert!(matches!(errors[0], ValidationError::UnresolvedDependency { .. }));
//! ```

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use crate::component::ModuleType;
use crate::config::Config;
use crate::errors::ValidationError;
use crate::observability::messages::validation::{
    ValidationCompleted, ValidationFailed, ValidationIssue, ValidationStarted,
};
use crate::observability::messages::StructuredLog;

/// Validates a pipeline configuration before a runtime is built from it.
///
/// # Returns
///
/// * `Ok(())` - Configuration is valid
/// * `Err(Vec<ValidationError>)` - Every problem found
pub fn validate_pipeline(config: &Config) -> Result<(), Vec<ValidationError>> {
    let start_msg = ValidationStarted {
        service_count: config.services.len(),
    };
    let span = start_msg.span("pipeline_validation");
    let _guard = span.enter();
    start_msg.log();

    let mut errors = Vec::new();
    errors.extend(validate_unique_service_names(config));

    let unresolved = validate_dependency_references(config);
    let references_resolve = unresolved.is_empty();
    errors.extend(unresolved);

    errors.extend(validate_module_types(config));
    errors.extend(validate_control_plane_name(config));

    if references_resolve {
        errors.extend(validate_acyclic_graph(config));
    }

    if errors.is_empty() {
        let component_count = config
            .services
            .iter()
            .filter(|s| parse_module_type(s.module_type.as_deref()) == Ok(Some(ModuleType::Component)))
            .count();
        ValidationCompleted {
            service_count: config.services.len(),
            agent_count: config.services.len() - component_count,
            component_count,
        }
        .log();
        Ok(())
    } else {
        for error in &errors {
            ValidationIssue { error }.log();
        }
        ValidationFailed {
            error_count: errors.len(),
        }
        .log();
        Err(errors)
    }
}

/// Parse an optional module type tag. Blank tags count as absent.
pub(crate) fn parse_module_type(raw: Option<&str>) -> Result<Option<ModuleType>, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => ModuleType::from_str(value)
            .map(Some)
            .map_err(|_| value.to_string()),
    }
}

fn validate_unique_service_names(config: &Config) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for service in &config.services {
        if !seen.insert(service.name.as_str()) {
            errors.push(ValidationError::DuplicateServiceName {
                service_name: service.name.clone(),
            });
        }
    }

    errors
}

fn validate_dependency_references(config: &Config) -> Vec<ValidationError> {
    let names: HashSet<&str> = config.services.iter().map(|s| s.name.as_str()).collect();
    let mut errors = Vec::new();

    for service in &config.services {
        for dependency in &service.depends_on {
            if !names.contains(dependency.as_str()) {
                errors.push(ValidationError::UnresolvedDependency {
                    service_name: service.name.clone(),
                    missing_dependency: dependency.clone(),
                });
            }
        }
    }

    errors
}

fn validate_module_types(config: &Config) -> Vec<ValidationError> {
    config
        .services
        .iter()
        .filter_map(|service| {
            parse_module_type(service.module_type.as_deref())
                .err()
                .map(|value| ValidationError::InvalidModuleType {
                    service_name: service.name.clone(),
                    value,
                })
        })
        .collect()
}

fn validate_control_plane_name(config: &Config) -> Vec<ValidationError> {
    config
        .services
        .iter()
        .filter(|service| service.name == config.control_plane)
        .map(|service| ValidationError::ControlPlaneNameCollision {
            service_name: service.name.clone(),
        })
        .collect()
}

/// DFS over dependency -> dependent edges; a node met again while still on the
/// recursion stack closes a cycle.
fn validate_acyclic_graph(config: &Config) -> Vec<ValidationError> {
    let mut graph: HashMap<&str, Vec<&str>> = HashMap::new();
    for service in &config.services {
        graph.entry(service.name.as_str()).or_default();
    }
    for service in &config.services {
        for dependency in &service.depends_on {
            if let Some(dependents) = graph.get_mut(dependency.as_str()) {
                dependents.push(service.name.as_str());
            }
        }
    }

    let mut visited = HashSet::new();
    let mut rec_stack = HashSet::new();
    let mut path = Vec::new();

    // Declaration order keeps the reported cycle stable between runs.
    for service in &config.services {
        let name = service.name.as_str();
        if visited.contains(name) {
            continue;
        }
        if let Some(cycle) = dfs_cycle_detection(name, &graph, &mut visited, &mut rec_stack, &mut path) {
            return vec![ValidationError::CyclicDependency { cycle }];
        }
    }

    Vec::new()
}

fn dfs_cycle_detection<'a>(
    node: &'a str,
    graph: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    rec_stack: &mut HashSet<&'a str>,
    path: &mut Vec<&'a str>,
) -> Option<Vec<String>> {
    visited.insert(node);
    rec_stack.insert(node);
    path.push(node);

    if let Some(neighbors) = graph.get(node) {
        for &neighbor in neighbors {
            if rec_stack.contains(neighbor) {
                let start = path.iter().position(|&n| n == neighbor).unwrap_or(0);
                let mut cycle: Vec<String> = path[start..].iter().map(|n| n.to_string()).collect();
                cycle.push(neighbor.to_string());
                return Some(cycle);
            }
            if !visited.contains(neighbor) {
                if let Some(cycle) = dfs_cycle_detection(neighbor, graph, visited, rec_stack, path) {
                    return Some(cycle);
                }
            }
        }
    }

    rec_stack.remove(node);
    path.pop();
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;

    fn service(name: &str, module_type: Option<&str>, depends_on: &[&str]) -> ServiceConfig {
        ServiceConfig {
            name: name.to_string(),
            description: String::new(),
            module_type: module_type.map(str::to_string),
            input_keys: vec![],
            output_keys: vec![],
            depends_on: depends_on.iter().map(|d| d.to_string()).collect(),
        }
    }

    fn config(services: Vec<ServiceConfig>) -> Config {
        Config {
            control_plane: "control_plane".to_string(),
            publisher_id: None,
            services,
        }
    }

    #[test]
    fn test_valid_pipeline() {
        let cfg = config(vec![
            service("researcher", Some("agent"), &[]),
            service("formatter", Some("component"), &["researcher"]),
            service("reviewer", None, &["formatter"]),
        ]);

        assert!(validate_pipeline(&cfg).is_ok());
    }

    #[test]
    fn test_validation_cases() {
        struct TestCase {
            name: &'static str,
            services: Vec<ServiceConfig>,
            expected: Vec<ValidationError>,
        }

        let test_cases = vec![
            TestCase {
                name: "duplicate service name",
                services: vec![service("a", None, &[]), service("a", None, &[])],
                expected: vec![ValidationError::DuplicateServiceName {
                    service_name: "a".into(),
                }],
            },
            TestCase {
                name: "unresolved dependency",
                services: vec![service("a", None, &["ghost"])],
                expected: vec![ValidationError::UnresolvedDependency {
                    service_name: "a".into(),
                    missing_dependency: "ghost".into(),
                }],
            },
            TestCase {
                name: "unsupported module type",
                services: vec![service("a", Some("robot"), &[])],
                expected: vec![ValidationError::InvalidModuleType {
                    service_name: "a".into(),
                    value: "robot".into(),
                }],
            },
            TestCase {
                name: "service named after control plane",
                services: vec![service("control_plane", None, &[])],
                expected: vec![ValidationError::ControlPlaneNameCollision {
                    service_name: "control_plane".into(),
                }],
            },
            TestCase {
                name: "self dependency",
                services: vec![service("a", None, &["a"])],
                expected: vec![ValidationError::CyclicDependency {
                    cycle: vec!["a".into(), "a".into()],
                }],
            },
            TestCase {
                name: "three node cycle",
                services: vec![
                    service("a", None, &["c"]),
                    service("b", None, &["a"]),
                    service("c", None, &["b"]),
                ],
                expected: vec![ValidationError::CyclicDependency {
                    cycle: vec!["a".into(), "b".into(), "c".into(), "a".into()],
                }],
            },
            TestCase {
                name: "errors accumulate",
                services: vec![
                    service("a", Some("robot"), &["ghost"]),
                    service("a", None, &[]),
                ],
                expected: vec![
                    ValidationError::DuplicateServiceName {
                        service_name: "a".into(),
                    },
                    ValidationError::UnresolvedDependency {
                        service_name: "a".into(),
                        missing_dependency: "ghost".into(),
                    },
                    ValidationError::InvalidModuleType {
                        service_name: "a".into(),
                        value: "robot".into(),
                    },
                ],
            },
        ];

        for case in test_cases {
            let errors = validate_pipeline(&config(case.services)).unwrap_err();
            assert_eq!(errors, case.expected, "case: {}", case.name);
        }
    }

    #[test]
    fn test_cycle_skipped_when_references_unresolved() {
        let cfg = config(vec![
            service("a", None, &["b", "ghost"]),
            service("b", None, &["a"]),
        ]);

        let errors = validate_pipeline(&cfg).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::UnresolvedDependency { .. }));
    }

    #[test]
    fn test_parse_module_type() {
        assert_eq!(parse_module_type(None), Ok(None));
        assert_eq!(parse_module_type(Some("  ")), Ok(None));
        assert_eq!(parse_module_type(Some("Agent")), Ok(Some(ModuleType::Agent)));
        assert_eq!(
            parse_module_type(Some("component")),
            Ok(Some(ModuleType::Component))
        );
        assert_eq!(parse_module_type(Some("robot")), Err("robot".to_string()));
    }
}
