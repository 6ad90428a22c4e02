// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeSet;

use crate::component::ModuleType;
use crate::errors::BridgeError;
use crate::types::{AGENT_INPUT_KEY, AGENT_OUTPUT_KEY};

/// Stored classification of a descriptor.
///
/// `Unchecked` only exists so harnesses can simulate a misconfigured node. It is
/// validated every time it is read.
#[derive(Debug, Clone, PartialEq)]
enum Classification {
    Checked(ModuleType),
    Unchecked(String),
}

/// A pipeline node that proxies a remote service.
///
/// The `name` doubles as the queue destination and as the key the engine uses for this
/// node. The module type decides how [`crate::bridge::outbound::submit`] shapes the task
/// and how [`crate::bridge::inbound::deliver`] extracts the reply; both go through
/// [`ServiceComponent::resolve_module_type`].
///
/// # Examples
/// ```
/// use pipeline_bridge::component::{ModuleType, ServiceComponent};
///
/// let agent = ServiceComponent::new("AgentService", "Agent Service Description", Some(ModuleType::Agent));
/// assert_eq!(agent.resolve_module_type().unwrap(), ModuleType::Agent);
///
/// let untagged = ServiceComponent::new("Legacy", "", None);
/// assert_eq!(untagged.resolve_module_type().unwrap(), ModuleType::Agent);
///
/// let broken = ServiceComponent::new("Broken", "", None).with_unchecked_module_type("INVALID");
/// assert!(broken.resolve_module_type().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceComponent {
    name: String,
    description: String,
    module_type: Option<Classification>,
    input_keys: Vec<String>,
    output_keys: Vec<String>,
}

impl ServiceComponent {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        module_type: Option<ModuleType>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            module_type: module_type.map(Classification::Checked),
            input_keys: Vec::new(),
            output_keys: Vec::new(),
        }
    }

    /// Declare the named fields a component node consumes and produces.
    pub fn with_keys(mut self, input_keys: Vec<String>, output_keys: Vec<String>) -> Self {
        self.input_keys = input_keys;
        self.output_keys = output_keys;
        self
    }

    /// Store a raw, unvalidated module type tag.
    ///
    /// Intended for harnesses that need a misconfigured node; production code builds
    /// descriptors through [`ServiceComponent::new`].
    #[doc(hidden)]
    pub fn with_unchecked_module_type(mut self, raw: impl Into<String>) -> Self {
        self.set_unchecked_module_type(raw);
        self
    }

    #[doc(hidden)]
    pub fn set_unchecked_module_type(&mut self, raw: impl Into<String>) {
        self.module_type = Some(Classification::Unchecked(raw.into()));
    }

    pub fn set_module_type(&mut self, module_type: Option<ModuleType>) {
        self.module_type = module_type.map(Classification::Checked);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The declared module type, validated.
    ///
    /// Returns `Ok(None)` when no type is declared (a blank raw tag counts as none) and
    /// `InvalidClassification` for any tag outside `{agent, component}`.
    pub fn module_type(&self) -> Result<Option<ModuleType>, BridgeError> {
        match &self.module_type {
            None => Ok(None),
            Some(Classification::Checked(module_type)) => Ok(Some(*module_type)),
            Some(Classification::Unchecked(raw)) if raw.trim().is_empty() => Ok(None),
            Some(Classification::Unchecked(raw)) => raw
                .parse::<ModuleType>()
                .map(Some)
                .map_err(|_| BridgeError::InvalidClassification {
                    node_name: self.name.clone(),
                    value: raw.clone(),
                }),
        }
    }

    /// The module type both translators act on: the declared one, or `Agent` when none
    /// is declared.
    pub fn resolve_module_type(&self) -> Result<ModuleType, BridgeError> {
        Ok(self.module_type()?.unwrap_or_default())
    }

    /// Keys this node reads from its accumulated input.
    pub fn input_keys(&self) -> Result<BTreeSet<String>, BridgeError> {
        Ok(match self.resolve_module_type()? {
            ModuleType::Agent => BTreeSet::from([AGENT_INPUT_KEY.to_string()]),
            ModuleType::Component => self.input_keys.iter().cloned().collect(),
        })
    }

    /// Keys this node's output carries once delivered.
    pub fn output_keys(&self) -> Result<BTreeSet<String>, BridgeError> {
        Ok(match self.resolve_module_type()? {
            ModuleType::Agent => BTreeSet::from([AGENT_OUTPUT_KEY.to_string()]),
            ModuleType::Component => self.output_keys.iter().cloned().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_module_type_table_driven() {
        struct TestCase {
            name: &'static str,
            component: ServiceComponent,
            expected: Option<ModuleType>,
        }

        let test_cases = vec![
            TestCase {
                name: "agent",
                component: ServiceComponent::new("a", "", Some(ModuleType::Agent)),
                expected: Some(ModuleType::Agent),
            },
            TestCase {
                name: "component",
                component: ServiceComponent::new("c", "", Some(ModuleType::Component)),
                expected: Some(ModuleType::Component),
            },
            TestCase {
                name: "absent defaults to agent",
                component: ServiceComponent::new("n", "", None),
                expected: Some(ModuleType::Agent),
            },
            TestCase {
                name: "blank raw tag counts as absent",
                component: ServiceComponent::new("b", "", None).with_unchecked_module_type("  "),
                expected: Some(ModuleType::Agent),
            },
            TestCase {
                name: "raw tag inside the set",
                component: ServiceComponent::new("r", "", None).with_unchecked_module_type("COMPONENT"),
                expected: Some(ModuleType::Component),
            },
            TestCase {
                name: "raw tag outside the set",
                component: ServiceComponent::new("x", "", Some(ModuleType::Agent))
                    .with_unchecked_module_type("INVALID"),
                expected: None,
            },
        ];

        for tc in test_cases {
            let resolved = tc.component.resolve_module_type().ok();
            assert_eq!(resolved, tc.expected, "case: {}", tc.name);
        }
    }

    #[test]
    fn test_invalid_classification_carries_node_and_value() {
        let component =
            ServiceComponent::new("AgentService", "", None).with_unchecked_module_type("INVALID");

        match component.module_type() {
            Err(BridgeError::InvalidClassification { node_name, value }) => {
                assert_eq!(node_name, "AgentService");
                assert_eq!(value, "INVALID");
            }
            other => panic!("expected InvalidClassification, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_module_type_reads_as_none() {
        let component = ServiceComponent::new("n", "", None);
        assert_eq!(component.module_type().unwrap(), None);
    }

    #[test]
    fn test_set_module_type_replaces_unchecked_tag() {
        let mut component = ServiceComponent::new("n", "", None).with_unchecked_module_type("bogus");
        assert!(component.resolve_module_type().is_err());

        component.set_module_type(Some(ModuleType::Component));
        assert_eq!(component.resolve_module_type().unwrap(), ModuleType::Component);
    }

    #[test]
    fn test_keys_follow_module_type() {
        let agent = ServiceComponent::new("a", "", Some(ModuleType::Agent))
            .with_keys(vec!["ignored".into()], vec![]);
        assert_eq!(agent.input_keys().unwrap(), BTreeSet::from(["input".to_string()]));
        assert_eq!(agent.output_keys().unwrap(), BTreeSet::from(["output".to_string()]));

        let component = ServiceComponent::new("c", "", Some(ModuleType::Component))
            .with_keys(vec!["text".into(), "style".into()], vec!["document".into()]);
        assert_eq!(
            component.input_keys().unwrap(),
            BTreeSet::from(["style".to_string(), "text".to_string()])
        );
        assert_eq!(component.output_keys().unwrap(), BTreeSet::from(["document".to_string()]));
    }
}
