//! Geometry module - bounding volumes over reference points
//!
//! Re-exports only. All logic in submodules.

mod sphere;

pub use sphere::{fit, BoundingSphere};
