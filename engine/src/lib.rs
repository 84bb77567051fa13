//! Stride Engine Library
//!
//! Third-person character locomotion core. Turns player intent (movement,
//! look, sprint, walk, jump) into a movement state, a velocity for a
//! collision-aware body, camera-relative facing, and a set of named
//! animation parameters, once per simulation tick.
//!
//! # Modules
//!
//! - [`input`] - Per-tick input snapshots with hold/toggle semantics
//! - [`player`] - Movement state machine, velocity integration and the [`CharacterRig`]
//! - [`camera`] - Third-person camera and character/camera yaw reconciliation
//! - [`animation`] - Animation parameter publishing
//! - [`physics`] - Character body interface and yaw helpers
//! - [`config`] - Tunables with JSON loading and validation
//!
//! # Example
//!
//! ```ignore
//! use stride_engine::prelude::*;
//!
//! let config = LocomotionConfig::load(Path::new("locomotion.json"))?;
//! let mut rig = CharacterRig::new(
//!     config,
//!     KinematicBody::default(),
//!     ThirdPersonCamera::new(),
//!     ParameterTable::new(),
//! );
//!
//! // Between ticks, report input events
//! rig.input_mut().on_move(Vec2::new(0.0, 1.0));
//! rig.input_mut().on_sprint(true);
//!
//! // Once per frame
//! let report = rig.tick(delta_time);
//! if report.state == MovementState::Sprinting {
//!     // ...
//! }
//! ```

pub mod animation;
pub mod camera;
pub mod config;
pub mod input;
pub mod physics;
pub mod player;

// Re-export commonly used types at crate level
pub use animation::{AnimationParameterMapper, AnimationSink, ParameterTable};
pub use camera::{CameraRig, OrientationReconciler, OrientationReport, ThirdPersonCamera};
pub use config::{ConfigError, LocomotionConfig, LocomotionVariant, SprintMode};
pub use input::{InputSample, InputSampler};
pub use physics::{CharacterBody, KinematicBody};
pub use player::{CharacterRig, LocomotionStateMachine, MovementState, TickReport};

/// Everything a host needs to drive a character.
pub mod prelude {
    pub use crate::animation::{AnimationSink, ParameterTable, names};
    pub use crate::camera::{CameraRig, ThirdPersonCamera};
    pub use crate::config::{LocomotionConfig, LocomotionVariant, SprintMode};
    pub use crate::physics::{CharacterBody, KinematicBody, Quat, Vec2, Vec3};
    pub use crate::player::{CharacterRig, MovementState, TickReport};
}
