//! Animation Parameters
//!
//! Publishes the locomotion outputs as named parameters. The mapper only
//! reads core state; nothing it computes flows back into movement.

use std::collections::HashMap;

use glam::Vec2;

use crate::camera::OrientationReport;
use crate::player::MovementState;

/// Parameter names understood by the animation graph.
pub mod names {
    pub const INPUT_X: &str = "InputX";
    pub const INPUT_Y: &str = "InputY";
    pub const INPUT_MAGNITUDE: &str = "InputMagnitude";
    pub const ROTATION_MISMATCH: &str = "RotationMismatch";
    pub const IS_GROUNDED: &str = "IsGrounded";
    pub const IS_FALLING: &str = "IsFalling";
    pub const IS_JUMPING: &str = "IsJumping";
    pub const IS_IDLING: &str = "IsIdling";
    pub const IS_ROTATING_TO_TARGET: &str = "IsRotatingToTarget";
}

/// Receiver of named animation parameters.
pub trait AnimationSink {
    fn set_float(&mut self, name: &str, value: f32);
    fn set_bool(&mut self, name: &str, value: bool);
}

/// Sink that keeps the most recent value of every parameter.
#[derive(Debug, Clone, Default)]
pub struct ParameterTable {
    floats: HashMap<String, f32>,
    bools: HashMap<String, bool>,
}

impl ParameterTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn float(&self, name: &str) -> Option<f32> {
        self.floats.get(name).copied()
    }

    pub fn flag(&self, name: &str) -> Option<bool> {
        self.bools.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.floats.len() + self.bools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floats.is_empty() && self.bools.is_empty()
    }
}

impl AnimationSink for ParameterTable {
    fn set_float(&mut self, name: &str, value: f32) {
        self.floats.insert(name.to_owned(), value);
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.bools.insert(name.to_owned(), value);
    }
}

/// Scale applied to the raw movement vector before smoothing.
pub fn blend_scale(state: MovementState) -> f32 {
    match state {
        MovementState::Sprinting => 1.5,
        MovementState::Running => 1.0,
        _ => 0.5,
    }
}

/// Smooths the input blend and publishes the locomotion parameters.
#[derive(Debug, Clone)]
pub struct AnimationParameterMapper {
    movement_blend_speed: f32,
    current_blend_input: Vec2,
}

impl Default for AnimationParameterMapper {
    fn default() -> Self {
        Self::new(4.0)
    }
}

impl AnimationParameterMapper {
    pub fn new(movement_blend_speed: f32) -> Self {
        Self {
            movement_blend_speed,
            current_blend_input: Vec2::ZERO,
        }
    }

    pub fn set_movement_blend_speed(&mut self, speed: f32) {
        self.movement_blend_speed = speed;
    }

    /// Smoothed blend input after the last update.
    pub fn blend_input(&self) -> Vec2 {
        self.current_blend_input
    }

    pub fn reset(&mut self) {
        self.current_blend_input = Vec2::ZERO;
    }

    /// Advance the blend toward this tick's target and publish everything.
    pub fn update(
        &mut self,
        dt: f32,
        movement: Vec2,
        state: MovementState,
        orientation: OrientationReport,
        sink: &mut impl AnimationSink,
    ) -> Vec2 {
        let target = movement * blend_scale(state);
        let t = (self.movement_blend_speed * dt).clamp(0.0, 1.0);
        self.current_blend_input = self.current_blend_input.lerp(target, t);

        let blend = self.current_blend_input;
        sink.set_float(names::INPUT_X, blend.x);
        sink.set_float(names::INPUT_Y, blend.y);
        sink.set_float(names::INPUT_MAGNITUDE, blend.length());
        sink.set_bool(names::IS_JUMPING, state == MovementState::Jumping);
        sink.set_bool(names::IS_GROUNDED, state.is_grounded());
        sink.set_bool(names::IS_FALLING, state == MovementState::Falling);
        sink.set_float(names::ROTATION_MISMATCH, orientation.rotation_mismatch);
        sink.set_bool(names::IS_IDLING, state == MovementState::Idling);
        sink.set_bool(names::IS_ROTATING_TO_TARGET, orientation.is_rotating_to_target);

        blend
    }
}
