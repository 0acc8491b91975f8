//! Synergy Hand - teleoperation reference from hand synergies
//!
//! Decodes the mixed scalar / sin-cos output of a synergy model into 45 joint
//! angles, places five reference fingertips and wraps them in a virtual
//! sphere. The model itself runs outside this crate.
//!
//! Entry point for WASM module. Contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

pub mod bridge;
pub mod codec;
pub mod config;
pub mod error;
pub mod geometry;
pub mod joints;
pub mod kinematics;
pub mod pipeline;

pub use codec::{decode, FixedIndexSet, Slot, STANDARD_FIXED_INDICES};
pub use config::HandConfig;
pub use error::{
    ConfigError, DecodeError, DimensionError, EmptyInputError, GloveError, PipelineError,
    PipelineResult,
};
pub use geometry::{fit, BoundingSphere};
pub use joints::{Finger, JointAngles, Segment, ANGLE_COUNT, JOINT_COUNT};
pub use kinematics::{fingertips, FingertipCalibration, FingertipModel, FingertipPositions};
pub use pipeline::{run, GloveClosure, Pipeline, PipelineOutput, PoseModel};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
