//! Character Body
//!
//! The collision/ground-sensing primitive the locomotion core drives.
//! [`CharacterBody`] is the narrow interface the core sees; [`KinematicBody`]
//! is a flat-ground implementation used by the headless simulator and tests.

use glam::{Quat, Vec3};

/// Physical body of a character.
///
/// Implementations report grounded state and the velocity produced by the
/// last applied move, accept position deltas, and carry the character's
/// facing rotation.
pub trait CharacterBody {
    /// Called once at the start of every tick, before any state is read.
    fn refresh(&mut self, _dt: f32) {}

    /// Whether the body touched walkable ground during its last move.
    fn is_grounded(&self) -> bool;

    /// Velocity actually achieved by the last move, in m/s.
    fn velocity(&self) -> Vec3;

    /// Move by `delta` meters, resolving collisions.
    fn request_move(&mut self, delta: Vec3);

    fn rotation(&self) -> Quat;

    fn set_rotation(&mut self, rotation: Quat);

    /// Facing direction (-Z in body space).
    fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    fn up(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }
}

/// Kinematic body standing on an infinite horizontal ground plane.
///
/// Moves that would end below the plane are clamped onto it, which marks the
/// body grounded. Velocity is derived from the clamped displacement and the
/// time step passed to [`CharacterBody::refresh`].
#[derive(Debug, Clone)]
pub struct KinematicBody {
    position: Vec3,
    rotation: Quat,
    velocity: Vec3,
    ground_height: f32,
    grounded: bool,
    time_step: f32,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 0.0)
    }
}

impl KinematicBody {
    /// Create a body at `position` above a ground plane at `ground_height`.
    pub fn new(position: Vec3, ground_height: f32) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            ground_height,
            grounded: position.y <= ground_height,
            time_step: 0.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn ground_height(&self) -> f32 {
        self.ground_height
    }

    /// Move the ground plane, e.g. to simulate stepping off a ledge.
    ///
    /// Grounded state updates on the next move.
    pub fn set_ground_height(&mut self, height: f32) {
        self.ground_height = height;
    }

    /// Place the body without producing velocity.
    pub fn teleport(&mut self, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;
        self.grounded = position.y <= self.ground_height;
    }
}

impl CharacterBody for KinematicBody {
    fn refresh(&mut self, dt: f32) {
        self.time_step = dt;
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn request_move(&mut self, delta: Vec3) {
        let start = self.position;
        let mut target = start + delta;

        if target.y <= self.ground_height {
            target.y = self.ground_height;
            self.grounded = true;
        } else {
            self.grounded = false;
        }

        self.position = target;
        self.velocity = if self.time_step > 0.0 {
            (target - start) / self.time_step
        } else {
            Vec3::ZERO
        };
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}
