//! Animation Module
//!
//! Downstream-only bridge from the locomotion core to an animation system.
//!
//! - [`AnimationParameterMapper`] - smooths the input blend and publishes
//!   state flags every tick
//! - [`AnimationSink`] - named float/bool parameter receiver
//! - [`ParameterTable`] - sink that simply stores the latest values

pub mod parameters;

pub use parameters::{AnimationParameterMapper, AnimationSink, ParameterTable, names};
