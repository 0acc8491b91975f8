//! Reference fingertip positions
//!
//! Evaluates the calibration table against a 45-angle vector. The output is
//! a teleoperation reference, not an anatomically exact pose: no joint
//! limits, no self-collision checks.

use nalgebra::Point3;

use super::calibration::FingertipCalibration;
use crate::error::{ConfigError, DimensionError};
use crate::joints::{Finger, ANGLE_COUNT};

/// Fingertip positions in meters, hand frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FingertipPositions {
    pub thumb: Point3<f32>,
    pub index: Point3<f32>,
    pub middle: Point3<f32>,
    pub ring: Point3<f32>,
    pub pinky: Point3<f32>,
}

impl FingertipPositions {
    pub fn get(&self, finger: Finger) -> Point3<f32> {
        match finger {
            Finger::Thumb => self.thumb,
            Finger::Index => self.index,
            Finger::Middle => self.middle,
            Finger::Ring => self.ring,
            Finger::Pinky => self.pinky,
        }
    }

    /// Points in [`Finger::ALL`] order
    pub fn to_array(&self) -> [Point3<f32>; 5] {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
    }
}

/// Approximate forward model for the five fingertips
#[derive(Clone, Debug, PartialEq)]
pub struct FingertipModel {
    calibration: FingertipCalibration,
}

impl FingertipModel {
    pub fn new(calibration: FingertipCalibration) -> Result<Self, ConfigError> {
        calibration.validate()?;
        Ok(Self { calibration })
    }

    pub fn nominal() -> Self {
        Self {
            calibration: FingertipCalibration::NOMINAL,
        }
    }

    pub fn calibration(&self) -> &FingertipCalibration {
        &self.calibration
    }

    /// Map 45 joint angles (degrees) to fingertip positions
    pub fn fingertips(&self, angles: &[f32]) -> Result<FingertipPositions, DimensionError> {
        if angles.len() != ANGLE_COUNT {
            return Err(DimensionError {
                expected: ANGLE_COUNT,
                got: angles.len(),
            });
        }

        let tip = |finger: Finger| {
            let record = self.calibration.get(finger);
            Point3::new(
                record.x.evaluate(angles),
                record.y.evaluate(angles),
                record.z.evaluate(angles),
            )
        };

        Ok(FingertipPositions {
            thumb: tip(Finger::Thumb),
            index: tip(Finger::Index),
            middle: tip(Finger::Middle),
            ring: tip(Finger::Ring),
            pinky: tip(Finger::Pinky),
        })
    }
}

impl Default for FingertipModel {
    fn default() -> Self {
        Self::nominal()
    }
}

/// Fingertips under the nominal calibration
pub fn fingertips(angles: &[f32]) -> Result<FingertipPositions, DimensionError> {
    FingertipModel::nominal().fingertips(angles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_open_hand_pose() {
        let tips = fingertips(&[0.0; ANGLE_COUNT]).unwrap();
        assert_relative_eq!(tips.thumb, Point3::new(0.08, 0.05, 0.0));
        assert_relative_eq!(tips.index, Point3::new(0.04, 0.12, 0.05));
        assert_relative_eq!(tips.middle, Point3::new(0.0, 0.13, 0.05));
        assert_relative_eq!(tips.ring, Point3::new(-0.04, 0.12, 0.05));
        assert_relative_eq!(tips.pinky, Point3::new(-0.08, 0.10, 0.05));
    }

    #[test]
    fn test_full_flexion_curls_fingers() {
        let mut angles = [0.0; ANGLE_COUNT];
        angles[1] = 90.0;
        angles[3] = 90.0;
        angles[13] = 90.0;
        angles[22] = 90.0;
        angles[31] = 90.0;
        angles[40] = 90.0;

        let tips = fingertips(&angles).unwrap();
        assert_relative_eq!(tips.thumb, Point3::new(0.08, 0.07, -0.05), epsilon = 1e-6);
        for finger in [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky] {
            assert!(tips.get(finger).y.abs() < 1e-6);
            assert_relative_eq!(tips.get(finger).z, 0.05);
        }
    }

    #[test]
    fn test_unrelated_angles_ignored() {
        let mut angles = [0.0; ANGLE_COUNT];
        angles[0] = 45.0;
        angles[44] = -120.0;
        let tips = fingertips(&angles).unwrap();
        assert_eq!(tips, fingertips(&[0.0; ANGLE_COUNT]).unwrap());
    }

    #[test]
    fn test_wrong_dimension_rejected() {
        let err = fingertips(&[0.0; 44]).unwrap_err();
        assert_eq!(err, DimensionError { expected: 45, got: 44 });
        assert!(fingertips(&[0.0; 62]).is_err());
    }

    #[test]
    fn test_custom_calibration() {
        let mut calibration = FingertipCalibration::NOMINAL;
        calibration.index.x.offset = 0.03;
        let model = FingertipModel::new(calibration).unwrap();
        let tips = model.fingertips(&[0.0; ANGLE_COUNT]).unwrap();
        assert_relative_eq!(tips.index.x, 0.03);
    }
}
