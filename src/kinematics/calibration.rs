//! Fingertip calibration table
//!
//! Placeholder approximation of a nominal hand, not a kinematic chain. Each
//! fingertip coordinate is `offset + gain * angle[joint] / 90°`, or a plain
//! `offset` when no joint drives that axis. Swapping in a real chain only
//! touches this table and `FingertipModel`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::joints::{Finger, ANGLE_COUNT};

/// Angle (degrees) that maps to a normalized flexion of 1.0
pub const FLEXION_SCALE_DEG: f32 = 90.0;

/// One coordinate of one fingertip
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisTerm {
    /// Coordinate at zero flexion (meters)
    pub offset: f32,
    /// Meters per unit of normalized flexion
    #[serde(default)]
    pub gain: f32,
    /// Angle id driving this coordinate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joint: Option<usize>,
}

impl AxisTerm {
    pub const fn fixed(offset: f32) -> Self {
        Self { offset, gain: 0.0, joint: None }
    }

    pub const fn driven(offset: f32, gain: f32, joint: usize) -> Self {
        Self { offset, gain, joint: Some(joint) }
    }

    /// Evaluate against a full 45-angle vector
    ///
    /// No clamping: angles outside [0°, 90°] extrapolate linearly.
    pub fn evaluate(&self, angles: &[f32]) -> f32 {
        match self.joint {
            Some(joint) => self.offset + self.gain * angles[joint] / FLEXION_SCALE_DEG,
            None => self.offset,
        }
    }
}

/// X (lateral spread), Y (flexion) and Z terms of one fingertip
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FingerCalibration {
    pub x: AxisTerm,
    pub y: AxisTerm,
    pub z: AxisTerm,
}

impl FingerCalibration {
    fn terms(&self) -> [AxisTerm; 3] {
        [self.x, self.y, self.z]
    }
}

/// Calibration records for all five fingertips
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FingertipCalibration {
    pub thumb: FingerCalibration,
    pub index: FingerCalibration,
    pub middle: FingerCalibration,
    pub ring: FingerCalibration,
    pub pinky: FingerCalibration,
}

impl FingertipCalibration {
    /// Nominal adult hand. Thumb Z couples to flexion, the others sit at 5 cm.
    pub const NOMINAL: Self = Self {
        thumb: FingerCalibration {
            x: AxisTerm::fixed(0.08),
            y: AxisTerm::driven(0.05, 0.02, 1),
            z: AxisTerm::driven(0.0, -0.05, 3),
        },
        index: FingerCalibration {
            x: AxisTerm::fixed(0.04),
            y: AxisTerm::driven(0.12, -0.12, 13),
            z: AxisTerm::fixed(0.05),
        },
        middle: FingerCalibration {
            x: AxisTerm::fixed(0.0),
            y: AxisTerm::driven(0.13, -0.13, 22),
            z: AxisTerm::fixed(0.05),
        },
        ring: FingerCalibration {
            x: AxisTerm::fixed(-0.04),
            y: AxisTerm::driven(0.12, -0.12, 31),
            z: AxisTerm::fixed(0.05),
        },
        pinky: FingerCalibration {
            x: AxisTerm::fixed(-0.08),
            y: AxisTerm::driven(0.10, -0.10, 40),
            z: AxisTerm::fixed(0.05),
        },
    };

    pub fn get(&self, finger: Finger) -> &FingerCalibration {
        match finger {
            Finger::Thumb => &self.thumb,
            Finger::Index => &self.index,
            Finger::Middle => &self.middle,
            Finger::Ring => &self.ring,
            Finger::Pinky => &self.pinky,
        }
    }

    /// Every joint reference must exist and every coefficient be finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        for finger in Finger::ALL {
            for term in self.get(finger).terms() {
                if !term.offset.is_finite() || !term.gain.is_finite() {
                    return Err(ConfigError::CalibrationNonFinite {
                        finger: finger.as_str(),
                    });
                }
                if let Some(joint) = term.joint {
                    if joint >= ANGLE_COUNT {
                        return Err(ConfigError::CalibrationJoint {
                            finger: finger.as_str(),
                            joint,
                            limit: ANGLE_COUNT,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for FingertipCalibration {
    fn default() -> Self {
        Self::NOMINAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominal_is_valid() {
        assert!(FingertipCalibration::NOMINAL.validate().is_ok());
    }

    #[test]
    fn test_axis_term_extrapolates() {
        let term = AxisTerm::driven(0.12, -0.12, 0);
        let mut angles = [0.0; ANGLE_COUNT];
        angles[0] = 180.0;
        assert!((term.evaluate(&angles) - (-0.12)).abs() < 1e-6);
        assert_eq!(AxisTerm::fixed(0.05).evaluate(&angles), 0.05);
    }

    #[test]
    fn test_bad_joint_rejected() {
        let mut calibration = FingertipCalibration::NOMINAL;
        calibration.ring.y.joint = Some(45);
        match calibration.validate() {
            Err(ConfigError::CalibrationJoint { finger, joint, .. }) => {
                assert_eq!(finger, "ring");
                assert_eq!(joint, 45);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut calibration = FingertipCalibration::NOMINAL;
        calibration.thumb.z.gain = f32::NAN;
        assert!(matches!(
            calibration.validate(),
            Err(ConfigError::CalibrationNonFinite { finger: "thumb" })
        ));
    }

    #[test]
    fn test_fixed_terms_deserialize_without_gain() {
        let json = r#"{ "offset": 0.05 }"#;
        let term: AxisTerm = serde_json::from_str(json).unwrap();
        assert_eq!(term, AxisTerm::fixed(0.05));
    }
}
