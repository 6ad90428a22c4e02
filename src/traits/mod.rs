pub mod engine;
pub mod message_factory;
pub mod queue;

pub use engine::PipelineEngine;
pub use message_factory::MessageFactory;
pub use queue::MessageQueue;
