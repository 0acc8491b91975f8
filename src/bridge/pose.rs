//! Pose bridge - mixed vectors in from JS, flat pose frames out
//!
//! JS runs the synergy model (onnxruntime-web) plus the inverse PCA and
//! scaler, then hands the mixed vector here. Each successful run is kept as
//! the last valid frame so the controller can hold pose on a bad tick.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use crate::config::HandConfig;
use crate::error::{ConfigError, PipelineError};
use crate::joints::ANGLE_COUNT;
use crate::pipeline::{Pipeline, PipelineOutput};

// ============================================================================
// FRAME LAYOUT
// ============================================================================

/// 45 joint angles (degrees)
pub const ANGLES_OFFSET: usize = 0;
/// 5 fingertips × (x, y, z), thumb first
pub const FINGERTIPS_OFFSET: usize = ANGLES_OFFSET + ANGLE_COUNT;
/// Sphere center (x, y, z)
pub const SPHERE_CENTER_OFFSET: usize = FINGERTIPS_OFFSET + 15;
/// Sphere radius
pub const SPHERE_RADIUS_OFFSET: usize = SPHERE_CENTER_OFFSET + 3;
/// Total f32 values per frame
pub const FRAME_LEN: usize = SPHERE_RADIUS_OFFSET + 1;

pub type PoseFrame = [f32; FRAME_LEN];

/// Flatten a pipeline output into the JS frame layout
pub fn to_frame(output: &PipelineOutput) -> PoseFrame {
    let mut frame = [0.0; FRAME_LEN];
    frame[ANGLES_OFFSET..FINGERTIPS_OFFSET].copy_from_slice(output.angles.as_slice());
    for (i, tip) in output.fingertips.to_array().iter().enumerate() {
        let base = FINGERTIPS_OFFSET + i * 3;
        frame[base..base + 3].copy_from_slice(tip.coords.as_slice());
    }
    frame[SPHERE_CENTER_OFFSET..SPHERE_RADIUS_OFFSET]
        .copy_from_slice(output.sphere.center.coords.as_slice());
    frame[SPHERE_RADIUS_OFFSET] = output.sphere.radius;
    frame
}

// ============================================================================
// BRIDGE STATE
// ============================================================================

#[derive(Default)]
pub struct PoseBridge {
    pipeline: Pipeline,
    last_valid: Option<(PoseFrame, f64)>,
    rejected: u32,
}

impl PoseBridge {
    /// Swap in a new configuration. Drops the held frame.
    pub fn configure(&mut self, config: &HandConfig) -> Result<(), ConfigError> {
        self.pipeline = config.build()?;
        self.last_valid = None;
        self.rejected = 0;
        Ok(())
    }

    /// Run one tick. `now` is in seconds.
    pub fn apply(&mut self, mixed: &[f32], now: f64) -> Result<PoseFrame, PipelineError> {
        match self.pipeline.run(mixed) {
            Ok(output) => {
                let frame = to_frame(&output);
                if frame.iter().all(|v| v.is_finite()) {
                    self.last_valid = Some((frame, now));
                }
                Ok(frame)
            }
            Err(err) => {
                self.rejected += 1;
                Err(err)
            }
        }
    }

    pub fn last_valid(&self) -> Option<&PoseFrame> {
        self.last_valid.as_ref().map(|(frame, _)| frame)
    }

    /// Seconds since the held frame was produced
    pub fn last_valid_age(&self, now: f64) -> Option<f64> {
        self.last_valid.as_ref().map(|(_, at)| (now - at).max(0.0))
    }

    /// Rejected ticks since the last configure
    pub fn rejected(&self) -> u32 {
        self.rejected
    }

    pub fn expected_mixed_len(&self) -> usize {
        self.pipeline.codec().encoded_len()
    }
}

thread_local! {
    static POSE_BRIDGE: RefCell<PoseBridge> = RefCell::new(PoseBridge::default());
}

// ============================================================================
// WASM API
// ============================================================================

/// Parse `json` and install it on this thread's bridge
///
/// Returns the number of paired angles now in use.
pub fn configure_from_json(json: &str) -> Result<usize, ConfigError> {
    let config = HandConfig::from_json(json)?;
    POSE_BRIDGE.with(|bridge_cell| bridge_cell.borrow_mut().configure(&config))?;
    Ok(config.fixed_indices.len())
}

/// Replace the hand configuration from a JSON string
#[wasm_bindgen]
pub fn configure_hand(json: &str) -> Result<(), JsValue> {
    let paired = configure_from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    console_log!("🖐️ Hand configured: {} paired angles", paired);
    Ok(())
}

/// Called from JavaScript with the inverse-transformed model output
///
/// Returns a Float32Array of `FRAME_LEN` values, see the layout constants.
#[wasm_bindgen]
pub fn process_mixed_vector(data: &[f32]) -> Result<Vec<f32>, JsValue> {
    let now = js_sys::Date::now() / 1000.0;
    POSE_BRIDGE.with(|bridge_cell| {
        let mut bridge = bridge_cell.borrow_mut();
        match bridge.apply(data, now) {
            Ok(frame) => Ok(frame.to_vec()),
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("Pose rejected ({} so far): {}", bridge.rejected(), err).into(),
                );
                Err(JsValue::from_str(&err.to_string()))
            }
        }
    })
}

/// Most recent successful frame, for hold-last-pose on a rejected tick
#[wasm_bindgen]
pub fn last_valid_pose() -> Option<Vec<f32>> {
    POSE_BRIDGE.with(|bridge_cell| bridge_cell.borrow().last_valid().map(|f| f.to_vec()))
}

/// Age of the held frame in seconds
#[wasm_bindgen]
pub fn last_valid_pose_age() -> Option<f64> {
    let now = js_sys::Date::now() / 1000.0;
    POSE_BRIDGE.with(|bridge_cell| bridge_cell.borrow().last_valid_age(now))
}

/// Mixed vector length the current configuration expects
#[wasm_bindgen]
pub fn expected_mixed_len() -> usize {
    POSE_BRIDGE.with(|bridge_cell| bridge_cell.borrow().expected_mixed_len())
}

#[wasm_bindgen]
pub fn pose_frame_len() -> usize {
    FRAME_LEN
}
