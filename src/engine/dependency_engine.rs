// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::DependencyGraph;
use crate::engine::RunState;
use crate::observability::messages::{engine::OutputRecorded, StructuredLog};
use crate::traits::PipelineEngine;
use crate::types::OutputMap;

/// Reference graph engine that runs nodes once their dependencies have produced output.
///
/// ## Data flow
///
/// When a node records output, every field is merged into the input of each of its
/// dependents, in the order the dependents were declared. A dependent with several
/// dependencies therefore sees the union of their outputs, later dependencies
/// overwriting same-named fields. A node without dependents is a sink: its output
/// becomes a final output of the run.
///
/// ## Readiness
///
/// A node is ready once every dependency is executed and the node itself has been
/// neither dispatched nor executed.
pub struct DependencyEngine {
    graph: DependencyGraph,
}

impl DependencyEngine {
    pub fn new(graph: DependencyGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Nodes that receive the run's initial input.
    pub fn entry_points(&self) -> Vec<String> {
        self.graph.entry_points()
    }

    /// Nodes that can be dispatched now, in declaration order.
    pub fn ready_nodes(&self, run_state: &RunState) -> Vec<String> {
        self.graph
            .nodes()
            .filter(|name| !run_state.is_dispatched(name) && !run_state.is_executed(name))
            .filter(|name| {
                self.graph
                    .dependencies_of(name)
                    .iter()
                    .all(|dependency| run_state.is_executed(dependency))
            })
            .cloned()
            .collect()
    }

    /// True once every node of the graph has produced output.
    pub fn is_complete(&self, run_state: &RunState) -> bool {
        self.graph.nodes().all(|name| run_state.is_executed(name))
    }
}

impl PipelineEngine for DependencyEngine {
    fn record_output(&self, output: OutputMap, node_name: &str, run_state: &mut RunState) {
        let dependents = self.graph.dependents_of(node_name);

        OutputRecorded {
            node_name,
            dependent_count: dependents.len(),
            field_count: output.len(),
        }
        .log();

        run_state.mark_executed(node_name);
        if dependents.is_empty() {
            run_state.insert_final_output(node_name, output);
            return;
        }
        for dependent in dependents {
            run_state.merge_input(dependent, &output);
        }
    }
}
