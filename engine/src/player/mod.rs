//! Player Module
//!
//! Character locomotion: state classification, velocity integration and the
//! rig that runs a full tick.
//!
//! # Components
//!
//! - [`MovementState`] - discrete locomotion state and its transition table
//! - [`LocomotionStateMachine`] - gravity, jump, camera-relative lateral movement
//! - [`CharacterRig`] - wires input, locomotion, orientation and animation together

pub mod character_rig;
pub mod movement_controller;
pub mod state;

pub use character_rig::{CharacterRig, MAX_DELTA_TIME, MIN_DELTA_TIME, TickReport};
pub use movement_controller::{LATERAL_DEAD_ZONE, LateralProfile, LocomotionStateMachine};
pub use state::{LocomotionSignals, MovementState, TRANSITION_PRIORITY, Transition, classify};
