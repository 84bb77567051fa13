//! Locomotion State Machine
//!
//! Per-tick movement core for the character. Each tick it:
//!
//! 1. classifies the [`MovementState`] from input and body feedback
//! 2. integrates vertical velocity (gravity, grounded reset, jump impulse)
//! 3. integrates lateral velocity relative to the camera (acceleration, drag,
//!    per-state speed cap)
//! 4. asks the body to move by `velocity * dt`
//!
//! # Vertical Integration Rule
//!
//! With `grounded` taken from the state just classified:
//!
//! ```text
//! if grounded && v < 0 { v = 0 }
//! v -= gravity * dt
//! if grounded && jump  { v += sqrt(jump_speed * 3 * gravity) }
//! ```
//!
//! so a jump from the ground leaves the tick at `impulse - gravity * dt`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use stride_engine::player::LocomotionStateMachine;
//!
//! let mut locomotion = LocomotionStateMachine::new(config);
//!
//! // Each tick, after the body refreshed its grounded/velocity feedback:
//! let velocity = locomotion.tick(dt, &input.sample(), &mut body, &camera);
//! ```

use glam::{Vec2, Vec3};

use crate::camera::CameraRig;
use crate::config::{LocomotionConfig, LocomotionVariant};
use crate::input::InputSample;
use crate::physics::{CharacterBody, flatten};

use super::state::{LocomotionSignals, MovementState, classify};

/// Horizontal speeds at or below this count as standing still.
pub const LATERAL_DEAD_ZONE: f32 = 0.01;

/// Acceleration and speed cap for one lateral state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LateralProfile {
    pub acceleration: f32,
    pub max_speed: f32,
}

/// Movement state classifier and velocity integrator.
#[derive(Debug, Clone)]
pub struct LocomotionStateMachine {
    config: LocomotionConfig,

    /// State selected on the last tick
    state: MovementState,

    /// Integrated vertical velocity in m/s (positive = upward)
    vertical_velocity: f32,

    /// Velocity requested from the body on the last tick
    velocity: Vec3,
}

impl Default for LocomotionStateMachine {
    fn default() -> Self {
        Self::new(LocomotionConfig::default())
    }
}

impl LocomotionStateMachine {
    pub fn new(config: LocomotionConfig) -> Self {
        Self {
            config,
            state: MovementState::Idling,
            vertical_velocity: 0.0,
            velocity: Vec3::ZERO,
        }
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Swap tunables at runtime. Integration state is kept.
    pub fn set_config(&mut self, config: LocomotionConfig) {
        self.config = config;
    }

    pub fn state(&self) -> MovementState {
        self.state
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    /// Set the vertical velocity directly (knockback, launch pads).
    pub fn set_vertical_velocity(&mut self, velocity: f32) {
        self.vertical_velocity = velocity;
    }

    /// Velocity requested from the body on the last tick.
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Clear integration state (respawn, teleport).
    pub fn reset(&mut self) {
        self.state = MovementState::Idling;
        self.vertical_velocity = 0.0;
        self.velocity = Vec3::ZERO;
    }

    /// Forward input is at least as strong as strafe input.
    pub fn can_run(movement: Vec2) -> bool {
        movement.y >= movement.x.abs()
    }

    /// Horizontal body speed is outside the dead zone.
    pub fn is_moving_laterally(body_velocity: Vec3) -> bool {
        Vec3::new(body_velocity.x, 0.0, body_velocity.z).length() > LATERAL_DEAD_ZONE
    }

    /// Acceleration and speed cap for a state.
    ///
    /// Walking and Sprinting have their own profiles; every other state,
    /// airborne ones included, uses the run baseline.
    pub fn lateral_profile(&self, state: MovementState) -> LateralProfile {
        match state {
            MovementState::Walking => LateralProfile {
                acceleration: self.config.walk_acceleration,
                max_speed: self.config.walk_speed,
            },
            MovementState::Sprinting => LateralProfile {
                acceleration: self.config.sprint_acceleration,
                max_speed: self.config.sprint_speed,
            },
            _ => LateralProfile {
                acceleration: self.config.run_acceleration,
                max_speed: self.config.run_speed,
            },
        }
    }

    /// Camera-relative world direction for a movement vector.
    ///
    /// The camera basis is flattened onto the XZ plane and renormalized; a
    /// vertical or zero basis vector contributes nothing.
    pub fn movement_direction(movement: Vec2, camera_forward: Vec3, camera_right: Vec3) -> Vec3 {
        flatten(camera_right) * movement.x + flatten(camera_forward) * movement.y
    }

    /// Step 1: pick this tick's state from input and body feedback.
    pub fn update_movement_state(
        &mut self,
        input: &InputSample,
        body_grounded: bool,
        body_velocity: Vec3,
    ) -> MovementState {
        let signals = LocomotionSignals {
            body_grounded,
            body_vertical_velocity: body_velocity.y,
            is_moving_laterally: Self::is_moving_laterally(body_velocity),
            is_movement_pressed: input.is_movement_pressed(),
            can_run: match self.config.variant {
                LocomotionVariant::WalkCapable => Self::can_run(input.movement),
                LocomotionVariant::SprintOnly => true,
            },
            walk_toggle_on: input.walk_toggle_on,
            sprint_toggle_on: input.sprint_toggle_on,
            variant: self.config.variant,
        };

        let next = classify(&signals);
        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, "movement state changed");
        }
        self.state = next;
        next
    }

    /// Step 2: integrate gravity and the jump impulse.
    pub fn integrate_vertical(&mut self, dt: f32, jump_pressed: bool) -> f32 {
        let grounded = self.state.is_grounded();

        if grounded && self.vertical_velocity < 0.0 {
            self.vertical_velocity = 0.0;
        }
        self.vertical_velocity -= self.config.gravity * dt;

        if grounded && jump_pressed {
            self.vertical_velocity += self.config.jump_impulse();
            tracing::trace!(vertical_velocity = self.vertical_velocity, "jump impulse");
        }

        self.vertical_velocity
    }

    /// Step 3: integrate lateral velocity and compose the vertical component.
    ///
    /// `body_velocity` is only read on the horizontal plane.
    pub fn integrate_lateral(&mut self, dt: f32, direction: Vec3, body_velocity: Vec3) -> Vec3 {
        let profile = self.lateral_profile(self.state);

        let lateral = Vec3::new(body_velocity.x, 0.0, body_velocity.z);
        let mut velocity = lateral + direction * profile.acceleration * dt;

        let drag_this_frame = self.config.drag * dt;
        velocity = if velocity.length() > drag_this_frame {
            velocity - velocity.normalize() * drag_this_frame
        } else {
            Vec3::ZERO
        };

        velocity = velocity.clamp_length_max(profile.max_speed);
        velocity.y = self.vertical_velocity;

        self.velocity = velocity;
        velocity
    }

    /// Run one full tick and push the resulting move into the body.
    ///
    /// Returns the velocity that was requested.
    pub fn tick(
        &mut self,
        dt: f32,
        input: &InputSample,
        body: &mut impl CharacterBody,
        camera: &impl CameraRig,
    ) -> Vec3 {
        let body_velocity = body.velocity();
        self.update_movement_state(input, body.is_grounded(), body_velocity);
        self.integrate_vertical(dt, input.jump_pressed);

        let direction = Self::movement_direction(input.movement, camera.forward(), camera.right());
        let velocity = self.integrate_lateral(dt, direction, body_velocity);

        body.request_move(velocity * dt);
        velocity
    }
}
