//! Pipeline module - decode → fingertips → virtual sphere
//!
//! Re-exports only. All logic in submodules.

mod glove;
mod model;
mod run;

pub use glove::{GloveClosure, GLOVE_CHANNELS};
pub use model::PoseModel;
pub use run::{run, Pipeline, PipelineOutput};
