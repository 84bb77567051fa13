//! Config Module
//!
//! Centralized tunables for the locomotion core.

pub mod locomotion_config;

pub use locomotion_config::{ConfigError, LocomotionConfig, LocomotionVariant, SprintMode};
