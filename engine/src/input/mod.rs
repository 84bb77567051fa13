//! Input Module
//!
//! Platform-agnostic sampling of player intent. Device polling and key
//! bindings live in the host; this module only receives already-mapped
//! signals and turns them into one [`InputSample`] per tick.
//!
//! # Example
//!
//! ```rust,ignore
//! use stride_engine::input::InputSampler;
//! use glam::Vec2;
//!
//! let mut sampler = InputSampler::new();
//! sampler.on_move(Vec2::new(0.0, 1.0));
//! sampler.on_jump(true);
//!
//! let sample = sampler.sample(); // read by the core this tick
//! sampler.end_tick();            // jump pulse and look delta cleared
//! ```

pub mod sampler;

pub use sampler::{InputSample, InputSampler};
