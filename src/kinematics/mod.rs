//! Kinematics module - reference fingertip positions from joint angles
//!
//! Re-exports only. All logic in submodules.

mod calibration;
mod fingertips;

pub use calibration::{AxisTerm, FingerCalibration, FingertipCalibration, FLEXION_SCALE_DEG};
pub use fingertips::{fingertips, FingertipModel, FingertipPositions};
