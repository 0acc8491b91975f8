//! Seam for the external synergy model
//!
//! The regression model, its inverse dimensionality reduction and inverse
//! scaling all live outside this crate (in the browser they run through
//! onnxruntime-web). Implementors return the mixed vector those stages
//! produce; the pipeline takes it from there.

use super::glove::GloveClosure;

pub trait PoseModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Glove closure → mixed scalar / sin-cos vector
    fn mixed_vector(&self, glove: &GloveClosure) -> Result<Vec<f32>, Self::Error>;
}
