//! Hand configuration
//!
//! The paired-index list must match the one the synergy model was trained
//! with. The calibration table is the nominal hand unless overridden.
//!
//! ```json
//! {
//!   "fixed_indices": [0, 1, 2, 3, 4, 5, 6, 7, 8, 13, 14, 16, 17, 25, 26, 34, 43],
//!   "fingertips": { "thumb": { "x": { "offset": 0.08 }, ... }, ... }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::codec::{FixedIndexSet, STANDARD_FIXED_INDICES};
use crate::error::ConfigError;
use crate::kinematics::{FingertipCalibration, FingertipModel};
use crate::pipeline::Pipeline;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandConfig {
    pub fixed_indices: Vec<usize>,
    pub fingertips: FingertipCalibration,
}

impl Default for HandConfig {
    fn default() -> Self {
        Self {
            fixed_indices: STANDARD_FIXED_INDICES.to_vec(),
            fingertips: FingertipCalibration::NOMINAL,
        }
    }
}

impl HandConfig {
    /// Parse from JSON. Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate and assemble a ready pipeline
    pub fn build(&self) -> Result<Pipeline, ConfigError> {
        let codec = FixedIndexSet::new(&self.fixed_indices)?;
        let kinematics = FingertipModel::new(self.fingertips)?;
        Ok(Pipeline::new(codec, kinematics))
    }
}
