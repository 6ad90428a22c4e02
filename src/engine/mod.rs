pub mod dependency_engine;
pub mod run_state;

pub use dependency_engine::DependencyEngine;
pub use run_state::RunState;
