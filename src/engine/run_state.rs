use std::collections::{BTreeMap, HashMap, HashSet};

use crate::component::ServiceComponent;
use crate::types::{InputMap, OutputMap};

/// Snapshot of one pipeline run.
///
/// Holds the descriptor and accumulated input of every service node, plus the
/// engine's bookkeeping: which nodes have been dispatched, which have produced output,
/// and the outputs of nodes nothing downstream consumes.
///
/// The bridge only reads descriptors from here. Everything else is mutated by the
/// engine and the orchestrator.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    components: HashMap<String, ServiceComponent>,
    inputs: HashMap<String, InputMap>,
    dispatched: HashSet<String>,
    executed: HashSet<String>,
    final_outputs: BTreeMap<String, OutputMap>,
}

impl RunState {
    pub fn new(components: impl IntoIterator<Item = ServiceComponent>) -> Self {
        let mut state = Self::default();
        for component in components {
            state.insert_component(component);
        }
        state
    }

    /// Register a descriptor under its own name, replacing any previous one.
    pub fn insert_component(&mut self, component: ServiceComponent) {
        self.components
            .insert(component.name().to_string(), component);
    }

    pub fn component(&self, node_name: &str) -> Option<&ServiceComponent> {
        self.components.get(node_name)
    }

    pub fn component_mut(&mut self, node_name: &str) -> Option<&mut ServiceComponent> {
        self.components.get_mut(node_name)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn input(&self, node_name: &str) -> Option<&InputMap> {
        self.inputs.get(node_name)
    }

    pub fn set_input(&mut self, node_name: impl Into<String>, input: InputMap) {
        self.inputs.insert(node_name.into(), input);
    }

    /// Insert every field of `values` into the node's input, overwriting same-named keys.
    pub fn merge_input(&mut self, node_name: &str, values: &OutputMap) {
        let input = self.inputs.entry(node_name.to_string()).or_default();
        for (key, value) in values {
            input.insert(key.clone(), value.clone());
        }
    }

    pub fn mark_dispatched(&mut self, node_name: &str) {
        self.dispatched.insert(node_name.to_string());
    }

    pub fn is_dispatched(&self, node_name: &str) -> bool {
        self.dispatched.contains(node_name)
    }

    pub fn mark_executed(&mut self, node_name: &str) {
        self.executed.insert(node_name.to_string());
    }

    pub fn is_executed(&self, node_name: &str) -> bool {
        self.executed.contains(node_name)
    }

    pub fn executed_count(&self) -> usize {
        self.executed.len()
    }

    pub fn insert_final_output(&mut self, node_name: impl Into<String>, output: OutputMap) {
        self.final_outputs.insert(node_name.into(), output);
    }

    /// Outputs of nodes with no dependents, keyed by node name.
    pub fn final_outputs(&self) -> &BTreeMap<String, OutputMap> {
        &self.final_outputs
    }

    pub fn into_final_outputs(self) -> BTreeMap<String, OutputMap> {
        self.final_outputs
    }
}
