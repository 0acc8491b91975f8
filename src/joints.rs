//! Joint angle vector - 15 hand joints × 3 Euler angles
//!
//! Layout matches the hand rig: thumb, index, middle, ring, pinky, each with
//! proximal, middle and distal joints. Angle `joint * 3 + axis` is the
//! Euler angle (degrees) of `joint` about `axis`.

use nalgebra::Vector3;
use std::ops::Index;

use crate::error::DimensionError;

/// Number of anatomical joints in the hand model
pub const JOINT_COUNT: usize = 15;

/// Number of decoded angles (3 Euler angles per joint)
pub const ANGLE_COUNT: usize = JOINT_COUNT * 3;

// ============================================================================
// FINGERS & SEGMENTS
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// All fingers in rig order
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    pub fn index(&self) -> usize {
        match self {
            Finger::Thumb => 0,
            Finger::Index => 1,
            Finger::Middle => 2,
            Finger::Ring => 3,
            Finger::Pinky => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }
}

/// Joint position along a finger, palm outwards
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    Proximal,
    Middle,
    Distal,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Proximal, Segment::Middle, Segment::Distal];

    pub fn index(&self) -> usize {
        match self {
            Segment::Proximal => 0,
            Segment::Middle => 1,
            Segment::Distal => 2,
        }
    }
}

/// Position of the first Euler angle of a joint in the 45-angle vector
pub fn joint_offset(finger: Finger, segment: Segment) -> usize {
    (finger.index() * 3 + segment.index()) * 3
}

// ============================================================================
// JOINT ANGLES
// ============================================================================

/// 45 joint angles in degrees, indexed by anatomical angle id
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointAngles([f32; ANGLE_COUNT]);

impl JointAngles {
    pub const ZERO: Self = Self([0.0; ANGLE_COUNT]);

    pub fn from_degrees(values: [f32; ANGLE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn to_array(&self) -> [f32; ANGLE_COUNT] {
        self.0
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.0.get(index).copied()
    }

    /// Euler triple (degrees) of one joint
    pub fn joint_euler(&self, finger: Finger, segment: Segment) -> Vector3<f32> {
        let base = joint_offset(finger, segment);
        Vector3::new(self.0[base], self.0[base + 1], self.0[base + 2])
    }
}

impl Default for JointAngles {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Index<usize> for JointAngles {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

impl AsRef<[f32]> for JointAngles {
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

impl TryFrom<&[f32]> for JointAngles {
    type Error = DimensionError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        let array: [f32; ANGLE_COUNT] = values.try_into().map_err(|_| DimensionError {
            expected: ANGLE_COUNT,
            got: values.len(),
        })?;
        Ok(Self(array))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_offsets_cover_all_angles() {
        let mut seen = [false; ANGLE_COUNT];
        for finger in Finger::ALL {
            for segment in Segment::ALL {
                let base = joint_offset(finger, segment);
                for axis in 0..3 {
                    assert!(!seen[base + axis]);
                    seen[base + axis] = true;
                }
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_joint_euler_reads_rig_order() {
        let mut values = [0.0; ANGLE_COUNT];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as f32;
        }
        let angles = JointAngles::from_degrees(values);

        // index finger middle joint is rig joint 4
        let euler = angles.joint_euler(Finger::Index, Segment::Middle);
        assert_eq!(euler, Vector3::new(12.0, 13.0, 14.0));

        let pinky_tip = angles.joint_euler(Finger::Pinky, Segment::Distal);
        assert_eq!(pinky_tip, Vector3::new(42.0, 43.0, 44.0));
    }

    #[test]
    fn test_try_from_rejects_wrong_length() {
        let short = vec![0.0; 44];
        let err = JointAngles::try_from(short.as_slice()).unwrap_err();
        assert_eq!(err, DimensionError { expected: 45, got: 44 });

        let exact = vec![1.5; 45];
        let angles = JointAngles::try_from(exact.as_slice()).unwrap();
        assert_eq!(angles[44], 1.5);
        assert_eq!(angles.get(44), Some(1.5));
        assert_eq!(angles.get(45), None);
        assert_eq!(angles.to_array().to_vec(), exact);
    }
}
