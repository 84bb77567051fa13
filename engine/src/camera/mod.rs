//! Camera Module
//!
//! Camera state and character-facing reconciliation.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod controller;
pub mod orientation;

pub use controller::{CameraRig, ThirdPersonCamera};
pub use orientation::{
    IDLE_ROTATION_TOLERANCE, OrientationReconciler, OrientationReport, signed_yaw_mismatch,
};
