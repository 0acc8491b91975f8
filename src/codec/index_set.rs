//! Paired-index configuration and the decode table built from it
//!
//! The upstream model encodes some angles as a (sin, cos) pair so the
//! regression never sees the ±180° wrap. Which angles are paired is fixed
//! at training time and must match here exactly.

use crate::error::DecodeError;
use crate::joints::ANGLE_COUNT;

/// Paired indices the synergy model was trained with
pub const STANDARD_FIXED_INDICES: [usize; 17] =
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 13, 14, 16, 17, 25, 26, 34, 43];

/// Encoding tag for one output angle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// One value, copied through verbatim
    Scalar,
    /// Two values (sin, cos), inverted with atan2
    SinCosPair,
}

impl Slot {
    /// Number of encoded values this slot consumes
    pub fn width(&self) -> usize {
        match self {
            Slot::Scalar => 1,
            Slot::SinCosPair => 2,
        }
    }
}

/// Validated set of paired indices plus its per-angle decode table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedIndexSet {
    /// Sorted, distinct, all < ANGLE_COUNT
    indices: Vec<usize>,
    slots: [Slot; ANGLE_COUNT],
}

impl FixedIndexSet {
    /// Build the decode table, rejecting duplicates and out-of-range indices
    pub fn new(indices: &[usize]) -> Result<Self, DecodeError> {
        let mut slots = [Slot::Scalar; ANGLE_COUNT];
        for &index in indices {
            if index >= ANGLE_COUNT {
                return Err(DecodeError::IndexOutOfRange {
                    index,
                    limit: ANGLE_COUNT,
                });
            }
            if slots[index] == Slot::SinCosPair {
                return Err(DecodeError::DuplicateIndex { index });
            }
            slots[index] = Slot::SinCosPair;
        }

        let indices = (0..ANGLE_COUNT)
            .filter(|&i| slots[i] == Slot::SinCosPair)
            .collect();

        Ok(Self { indices, slots })
    }

    /// Set matching [`STANDARD_FIXED_INDICES`]
    pub fn standard() -> Self {
        let mut slots = [Slot::Scalar; ANGLE_COUNT];
        for &index in STANDARD_FIXED_INDICES.iter() {
            slots[index] = Slot::SinCosPair;
        }
        Self {
            indices: STANDARD_FIXED_INDICES.to_vec(),
            slots,
        }
    }

    /// Paired indices in ascending order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.slot(index) == Some(Slot::SinCosPair)
    }

    pub fn slot(&self, index: usize) -> Option<Slot> {
        self.slots.get(index).copied()
    }

    pub fn slots(&self) -> &[Slot; ANGLE_COUNT] {
        &self.slots
    }

    /// Required length of a mixed vector decoded with this set
    pub fn encoded_len(&self) -> usize {
        ANGLE_COUNT + self.indices.len()
    }
}

impl Default for FixedIndexSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_set_is_valid() {
        let built = FixedIndexSet::new(&STANDARD_FIXED_INDICES).unwrap();
        assert_eq!(built, FixedIndexSet::standard());
        assert_eq!(built.len(), 17);
        assert_eq!(built.encoded_len(), 62);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let set = FixedIndexSet::new(&[43, 0, 13]).unwrap();
        assert_eq!(set.indices(), &[0, 13, 43]);
        assert!(set.contains(13));
        assert!(!set.contains(12));
        assert_eq!(set.slot(43), Some(Slot::SinCosPair));
        assert_eq!(set.slot(45), None);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = FixedIndexSet::new(&[0, 45]).unwrap_err();
        assert_eq!(err, DecodeError::IndexOutOfRange { index: 45, limit: 45 });
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = FixedIndexSet::new(&[3, 7, 3]).unwrap_err();
        assert_eq!(err, DecodeError::DuplicateIndex { index: 3 });
    }

    #[test]
    fn test_empty_set_is_all_scalar() {
        let set = FixedIndexSet::new(&[]).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.encoded_len(), 45);
        assert!(set.slots().iter().all(|s| s.width() == 1));
    }
}
