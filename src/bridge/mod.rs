//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod pose;

pub use pose::{
    // WASM entry points
    configure_hand,
    process_mixed_vector,
    last_valid_pose,
    last_valid_pose_age,
    expected_mixed_len,
    pose_frame_len,
    // Internal API
    configure_from_json,
    to_frame,
    PoseBridge,
    PoseFrame,
    // Frame layout
    ANGLES_OFFSET, FINGERTIPS_OFFSET, SPHERE_CENTER_OFFSET, SPHERE_RADIUS_OFFSET, FRAME_LEN,
};
