// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::bridge::{QueueMessageFactory, ServiceBridge};
use crate::component::ServiceComponent;
use crate::config::validation::parse_module_type;
use crate::config::{Config, DependencyGraph};
use crate::engine::DependencyEngine;
use crate::errors::{ConfigError, ValidationError};
use crate::orchestrator::PipelineOrchestrator;

/// Pipeline runtime builder: turns a configuration into an orchestrator and the
/// service descriptors it runs over.
///
/// # Examples
///
/// ```
/// use pipeline_bridge::config::{Config, RuntimeBuilder, ServiceConfig};
///
/// let config = Config {
///     control_plane: "control_plane".to_string(),
///     publisher_id: Some("orchestrator".to_string()),
///     services: vec![ServiceConfig {
///         name: "researcher".to_string(),
///         description: "Finds facts".to_string(),
///         module_type: Some("agent".to_string()),
///         input_keys: vec![],
///         output_keys: vec![],
///         depends_on: vec![],
///     }],
/// };
///
/// let (orchestrator, components) = RuntimeBuilder::from_config(&config).unwrap();
///
/// assert_eq!(orchestrator.engine().entry_points(), vec!["researcher"]);
/// assert_eq!(components[0].name(), "researcher");
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build the orchestrator and descriptors for `cfg`.
    ///
    /// Descriptors come back in declaration order. Task messages carry
    /// `cfg.publisher_id` as their sender when one is set.
    pub fn from_config(
        cfg: &Config,
    ) -> Result<(PipelineOrchestrator, Vec<ServiceComponent>), ConfigError> {
        let mut graph = DependencyGraph::new();
        let mut components = Vec::with_capacity(cfg.services.len());

        for service in &cfg.services {
            let module_type = parse_module_type(service.module_type.as_deref()).map_err(|value| {
                ConfigError::Validation(vec![ValidationError::InvalidModuleType {
                    service_name: service.name.clone(),
                    value,
                }])
            })?;

            graph.add_node(service.name.clone(), service.depends_on.clone());
            components.push(
                ServiceComponent::new(
                    service.name.as_str(),
                    service.description.as_str(),
                    module_type,
                )
                .with_keys(service.input_keys.clone(), service.output_keys.clone()),
            );
        }

        let factory = match &cfg.publisher_id {
            Some(publisher_id) => QueueMessageFactory::with_publisher(publisher_id.as_str()),
            None => QueueMessageFactory::new(),
        };
        let orchestrator =
            PipelineOrchestrator::new(DependencyEngine::new(graph), ServiceBridge::new(factory));

        Ok((orchestrator, components))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ModuleType;
    use crate::config::ServiceConfig;
    use std::collections::BTreeSet;

    fn service(name: &str, module_type: Option<&str>, depends_on: &[&str]) -> ServiceConfig {
        ServiceConfig {
            name: name.to_string(),
            description: format!("{} service", name),
            module_type: module_type.map(str::to_string),
            input_keys: vec!["text".to_string()],
            output_keys: vec!["document".to_string()],
            depends_on: depends_on.iter().map(|d| d.to_string()).collect(),
        }
    }

    #[test]
    fn test_builds_descriptors_in_declaration_order() {
        let cfg = Config {
            control_plane: "control_plane".to_string(),
            publisher_id: None,
            services: vec![
                service("researcher", Some("agent"), &[]),
                service("formatter", Some("component"), &["researcher"]),
                service("legacy", None, &["formatter"]),
            ],
        };

        let (orchestrator, components) = RuntimeBuilder::from_config(&cfg).unwrap();

        let names: Vec<&str> = components.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["researcher", "formatter", "legacy"]);
        assert_eq!(components[0].module_type().unwrap(), Some(ModuleType::Agent));
        assert_eq!(components[1].module_type().unwrap(), Some(ModuleType::Component));
        assert_eq!(components[2].module_type().unwrap(), None);
        assert_eq!(
            components[1].output_keys().unwrap(),
            BTreeSet::from(["document".to_string()])
        );
        assert_eq!(orchestrator.engine().entry_points(), vec!["researcher"]);
        assert_eq!(
            orchestrator.engine().graph().dependents_of("researcher"),
            &["formatter".to_string()]
        );
    }

    #[test]
    fn test_publisher_id_reaches_factory() {
        let cfg = Config {
            control_plane: "control_plane".to_string(),
            publisher_id: Some("orchestrator".to_string()),
            services: vec![service("researcher", None, &[])],
        };

        let (orchestrator, components) = RuntimeBuilder::from_config(&cfg).unwrap();
        let input = serde_json::json!({"input": "tides"})
            .as_object()
            .cloned()
            .unwrap();
        let message = orchestrator
            .bridge()
            .submit(&components[0], "t1", &input)
            .unwrap();

        assert_eq!(message.publisher_id.as_deref(), Some("orchestrator"));
    }

    #[test]
    fn test_unsupported_module_type_is_rejected() {
        let cfg = Config {
            control_plane: "control_plane".to_string(),
            publisher_id: None,
            services: vec![service("a", Some("robot"), &[])],
        };

        match RuntimeBuilder::from_config(&cfg) {
            Err(ConfigError::Validation(errors)) => assert_eq!(
                errors,
                vec![ValidationError::InvalidModuleType {
                    service_name: "a".into(),
                    value: "robot".into(),
                }]
            ),
            other => panic!("expected validation error, got {:?}", other.err()),
        }
    }
}
