//! Physics module
//!
//! The body the locomotion core pushes around, plus shared math conventions.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//! - Angles in degrees
//!
//! # Submodules
//!
//! - [`types`] - glam re-exports and yaw conventions
//! - [`body`] - [`CharacterBody`] trait and the flat-ground [`KinematicBody`]

pub mod body;
pub mod types;

pub use body::{CharacterBody, KinematicBody};
pub use types::{Quat, Vec2, Vec3, flatten, yaw_forward, yaw_of, yaw_rotation};
