//! In-process message queue used to run pipelines without an external broker.

pub mod local;

pub use local::LocalMessageQueue;
