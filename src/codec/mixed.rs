//! Mixed-vector decode / encode
//!
//! Walks the 45 output angles in order with a read cursor into the flat
//! encoded vector. Paired slots consume (sin, cos) and become
//! `atan2(sin, cos)` in degrees, so results lie in (-180°, 180°]. Scalar
//! slots are copied through untouched.

use tracing::warn;

use super::index_set::{FixedIndexSet, Slot};
use crate::error::DecodeError;
use crate::joints::{JointAngles, ANGLE_COUNT};

impl FixedIndexSet {
    /// Decode a mixed vector into 45 joint angles (degrees)
    pub fn decode(&self, encoded: &[f32]) -> Result<JointAngles, DecodeError> {
        let expected = self.encoded_len();
        if encoded.len() != expected {
            warn!(expected, got = encoded.len(), "rejecting mixed vector");
            return Err(DecodeError::LengthMismatch {
                expected,
                got: encoded.len(),
            });
        }

        let mut angles = [0.0f32; ANGLE_COUNT];
        let mut cursor = 0;
        for (angle, slot) in angles.iter_mut().zip(self.slots().iter()) {
            *angle = match slot {
                Slot::SinCosPair => {
                    let sin_v = encoded[cursor];
                    let cos_v = encoded[cursor + 1];
                    sin_v.atan2(cos_v).to_degrees()
                }
                Slot::Scalar => encoded[cursor],
            };
            cursor += slot.width();
        }
        debug_assert_eq!(cursor, expected);

        Ok(JointAngles::from_degrees(angles))
    }

    /// Encode joint angles into the mixed layout this set decodes
    pub fn encode(&self, angles: &JointAngles) -> Vec<f32> {
        let mut encoded = Vec::with_capacity(self.encoded_len());
        for (&angle, slot) in angles.as_slice().iter().zip(self.slots().iter()) {
            match slot {
                Slot::SinCosPair => {
                    // f64 keeps sin(180°) non-negative so 180° decodes as 180°
                    let (sin_v, cos_v) = f64::from(angle).to_radians().sin_cos();
                    encoded.push(sin_v as f32);
                    encoded.push(cos_v as f32);
                }
                Slot::Scalar => encoded.push(angle),
            }
        }
        encoded
    }
}

/// Decode `encoded` with an ad-hoc paired-index list
///
/// Validates `fixed_indices` on every call. Build a [`FixedIndexSet`] once
/// when decoding repeatedly.
pub fn decode(encoded: &[f32], fixed_indices: &[usize]) -> Result<JointAngles, DecodeError> {
    FixedIndexSet::new(fixed_indices)?.decode(encoded)
}
