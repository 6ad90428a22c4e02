//! Drives a pipeline run across the queue: dispatch ready nodes, apply replies, repeat.

pub mod pipeline;

pub use pipeline::PipelineOrchestrator;
