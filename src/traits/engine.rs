use crate::engine::RunState;
use crate::types::OutputMap;

/// The graph engine side of the bridge.
///
/// The engine owns the run state. The inbound translator reads a node's descriptor from
/// it, then hands the extracted output back through `record_output`; merging that output
/// and deciding which nodes become runnable is entirely the engine's business.
pub trait PipelineEngine: Send + Sync {
    /// Record that `node_name` produced `output`.
    fn record_output(&self, output: OutputMap, node_name: &str, run_state: &mut RunState);
}
