//! Codec module - mixed scalar / sin-cos encoding of joint angles
//!
//! Re-exports only. All logic in submodules.

mod index_set;
mod mixed;

pub use index_set::{FixedIndexSet, Slot, STANDARD_FIXED_INDICES};
pub use mixed::decode;
