//! Character Rig
//!
//! Owns one of each locomotion component plus the injected body, camera and
//! animation sink, and runs them in a fixed order every tick:
//!
//! 1. body refresh (grounded/velocity feedback)
//! 2. input snapshot
//! 3. [`LocomotionStateMachine`] - state, vertical and lateral velocity, move
//! 4. [`OrientationReconciler`] - camera rotation, character yaw, mismatch
//! 5. [`AnimationParameterMapper`] - publish parameters
//! 6. input end-of-tick (jump pulse and look delta cleared)
//!
//! # Usage
//!
//! ```rust,ignore
//! use stride_engine::prelude::*;
//!
//! let mut rig = CharacterRig::new(
//!     LocomotionConfig::default(),
//!     KinematicBody::default(),
//!     ThirdPersonCamera::new(),
//!     ParameterTable::new(),
//! );
//!
//! rig.input_mut().on_move(Vec2::new(0.0, 1.0));
//! let report = rig.tick(delta_time);
//! ```

use glam::{Vec2, Vec3};

use crate::animation::{AnimationParameterMapper, AnimationSink};
use crate::camera::{CameraRig, OrientationReconciler};
use crate::config::LocomotionConfig;
use crate::input::InputSampler;
use crate::physics::CharacterBody;

use super::movement_controller::LocomotionStateMachine;
use super::state::MovementState;

/// Smallest time step handed to the components, in seconds.
pub const MIN_DELTA_TIME: f32 = 0.0001;

/// Largest time step handed to the components, in seconds.
/// Longer frames (stalls, breakpoints) are shortened to this.
pub const MAX_DELTA_TIME: f32 = 0.1;

/// Summary of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Number of ticks run so far, this one included
    pub tick: u64,
    /// Time step actually used, after clamping
    pub dt: f32,
    pub state: MovementState,
    /// Velocity requested from the body
    pub velocity: Vec3,
    pub rotation_mismatch: f32,
    pub is_rotating_to_target: bool,
    pub blend_input: Vec2,
}

/// A controllable character: input, locomotion, orientation and animation.
#[derive(Debug)]
pub struct CharacterRig<B, C, A> {
    config: LocomotionConfig,
    input: InputSampler,
    locomotion: LocomotionStateMachine,
    orientation: OrientationReconciler,
    animation: AnimationParameterMapper,
    body: B,
    camera: C,
    sink: A,
    tick_count: u64,
}

impl<B, C, A> CharacterRig<B, C, A>
where
    B: CharacterBody,
    C: CameraRig,
    A: AnimationSink,
{
    /// Build a rig. The camera starts behind the body's current facing.
    pub fn new(config: LocomotionConfig, body: B, mut camera: C, sink: A) -> Self {
        let mut orientation = OrientationReconciler::new(&config);
        orientation.sync_to_body(&body);
        camera.set_rotation(orientation.camera_pitch(), orientation.camera_yaw());

        tracing::debug!(variant = ?config.variant, sprint_mode = ?config.sprint_mode, "character rig created");

        Self {
            config,
            input: InputSampler::with_sprint_mode(config.sprint_mode),
            locomotion: LocomotionStateMachine::new(config),
            orientation,
            animation: AnimationParameterMapper::new(config.movement_blend_speed),
            body,
            camera,
            sink,
            tick_count: 0,
        }
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Swap tunables at runtime. Integration state is kept; held input is
    /// dropped only when the sprint mode changes.
    pub fn set_config(&mut self, config: LocomotionConfig) {
        self.config = config;
        self.locomotion.set_config(config);
        self.orientation.apply_config(&config);
        self.animation.set_movement_blend_speed(config.movement_blend_speed);
        if self.input.sprint_mode() != config.sprint_mode {
            self.input = InputSampler::with_sprint_mode(config.sprint_mode);
        }
    }

    /// Where the host reports input events between ticks.
    pub fn input_mut(&mut self) -> &mut InputSampler {
        &mut self.input
    }

    pub fn input(&self) -> &InputSampler {
        &self.input
    }

    pub fn locomotion(&self) -> &LocomotionStateMachine {
        &self.locomotion
    }

    pub fn orientation(&self) -> &OrientationReconciler {
        &self.orientation
    }

    pub fn animation(&self) -> &AnimationParameterMapper {
        &self.animation
    }

    pub fn state(&self) -> MovementState {
        self.locomotion.state()
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    pub fn sink(&self) -> &A {
        &self.sink
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Run one simulation tick.
    pub fn tick(&mut self, dt: f32) -> TickReport {
        let dt = dt.clamp(MIN_DELTA_TIME, MAX_DELTA_TIME);

        self.body.refresh(dt);
        let sample = self.input.sample();

        let velocity = self.locomotion.tick(dt, &sample, &mut self.body, &self.camera);
        let state = self.locomotion.state();

        let orientation =
            self.orientation
                .update(dt, sample.look, state, &mut self.body, &mut self.camera);

        let blend_input =
            self.animation
                .update(dt, sample.movement, state, orientation, &mut self.sink);

        self.input.end_tick();
        self.tick_count += 1;

        tracing::trace!(
            tick = self.tick_count,
            state = ?state,
            speed = Vec3::new(velocity.x, 0.0, velocity.z).length(),
            mismatch = orientation.rotation_mismatch,
            "tick"
        );

        TickReport {
            tick: self.tick_count,
            dt,
            state,
            velocity,
            rotation_mismatch: orientation.rotation_mismatch,
            is_rotating_to_target: orientation.is_rotating_to_target,
            blend_input,
        }
    }

    /// Clear input, integration and blend state and re-align the camera.
    pub fn reset(&mut self) {
        self.input.reset();
        self.locomotion.reset();
        self.animation.reset();
        self.orientation.sync_to_body(&self.body);
        self.camera
            .set_rotation(self.orientation.camera_pitch(), self.orientation.camera_yaw());
    }

    /// Take the injected collaborators back.
    pub fn into_parts(self) -> (B, C, A) {
        (self.body, self.camera, self.sink)
    }
}
