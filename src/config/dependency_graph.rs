use std::collections::HashMap;

/// Dependency structure of a pipeline's service nodes.
///
/// Keeps both directions: `dependencies` (node -> what it waits for) and `dependents`
/// (node -> who consumes its output). Nodes iterate in declaration order so that
/// dispatch and output forwarding are deterministic.
///
/// # Examples
/// ```
/// use pipeline_bridge::config::DependencyGraph;
///
/// let mut graph = DependencyGraph::new();
/// graph.add_node("researcher".to_string(), vec![]);
/// graph.add_node("writer".to_string(), vec!["researcher".to_string()]);
///
/// assert_eq!(graph.entry_points(), vec!["researcher".to_string()]);
/// assert_eq!(graph.dependents_of("researcher"), ["writer".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    order: Vec<String>,
    dependencies: HashMap<String, Vec<String>>,
    dependents: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and the nodes it depends on
    pub fn add_node(&mut self, name: String, depends_on: Vec<String>) {
        for dependency in &depends_on {
            self.dependents
                .entry(dependency.clone())
                .or_default()
                .push(name.clone());
        }
        if !self.dependencies.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.dependencies.insert(name, depends_on);
    }

    /// Nodes `name` waits for, in declaration order
    pub fn dependencies_of(&self, name: &str) -> &[String] {
        self.dependencies.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nodes that consume `name`'s output, in declaration order
    pub fn dependents_of(&self, name: &str) -> &[String] {
        self.dependents.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All node names in declaration order
    pub fn nodes(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }

    /// Nodes with no dependencies
    pub fn entry_points(&self) -> Vec<String> {
        self.order
            .iter()
            .filter(|name| self.dependencies_of(name).is_empty())
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
