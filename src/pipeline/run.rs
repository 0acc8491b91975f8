//! Pipeline orchestrator
//!
//! Strictly linear: decode, then fingertips, then sphere. The first failing
//! stage aborts the run and its error is returned as-is.

use tracing::debug;

use super::glove::GloveClosure;
use super::model::PoseModel;
use crate::codec::FixedIndexSet;
use crate::error::{PipelineError, PipelineResult};
use crate::geometry::{fit, BoundingSphere};
use crate::joints::JointAngles;
use crate::kinematics::{FingertipModel, FingertipPositions};

/// Everything one pipeline invocation produces
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipelineOutput {
    pub angles: JointAngles,
    pub fingertips: FingertipPositions,
    pub sphere: BoundingSphere,
}

/// Decode table plus fingertip model, built once and reused per tick
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pipeline {
    codec: FixedIndexSet,
    kinematics: FingertipModel,
}

impl Pipeline {
    pub fn new(codec: FixedIndexSet, kinematics: FingertipModel) -> Self {
        Self { codec, kinematics }
    }

    pub fn codec(&self) -> &FixedIndexSet {
        &self.codec
    }

    pub fn kinematics(&self) -> &FingertipModel {
        &self.kinematics
    }

    /// Run on a mixed vector already inverse-transformed by the model side
    pub fn run(&self, mixed: &[f32]) -> PipelineResult<PipelineOutput> {
        let angles = self.codec.decode(mixed)?;
        debug!(paired = self.codec.len(), "decoded joint angles");

        let fingertips = self.kinematics.fingertips(angles.as_slice())?;
        let sphere = fit(&fingertips.to_array())?;
        debug!(
            center_x = sphere.center.x,
            center_y = sphere.center.y,
            center_z = sphere.center.z,
            radius = sphere.radius,
            "fitted virtual sphere"
        );

        Ok(PipelineOutput {
            angles,
            fingertips,
            sphere,
        })
    }

    /// Glove → external model → core pipeline
    pub fn run_glove<M: PoseModel>(
        &self,
        model: &M,
        glove: &GloveClosure,
    ) -> PipelineResult<PipelineOutput> {
        let mixed = model
            .mixed_vector(glove)
            .map_err(|err| PipelineError::Model(Box::new(err)))?;
        self.run(&mixed)
    }
}

/// One-shot run with an ad-hoc paired-index list and nominal calibration
pub fn run(mixed: &[f32], fixed_indices: &[usize]) -> PipelineResult<PipelineOutput> {
    let codec = FixedIndexSet::new(fixed_indices)?;
    Pipeline::new(codec, FingertipModel::nominal()).run(mixed)
}
