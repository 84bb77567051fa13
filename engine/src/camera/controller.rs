//! Third-Person Camera
//!
//! The camera side of the locomotion core. [`CameraRig`] is the narrow
//! interface the core depends on: a world-space basis to move relative to and
//! a way to apply the reconciled pitch/yaw. [`ThirdPersonCamera`] is a
//! window-system agnostic implementation that also computes a follow
//! position behind a pivot.
//!
//! # Coordinate System
//! - +X = right
//! - +Y = up
//! - -Z = forward
//!
//! Angles are in degrees. Yaw 0 looks toward -Z, positive yaw turns right
//! (clockwise from above). Positive pitch looks down.

use glam::{Quat, Vec3};

/// Camera as seen by the locomotion core.
pub trait CameraRig {
    /// World-space look direction.
    fn forward(&self) -> Vec3;

    /// World-space right direction.
    fn right(&self) -> Vec3;

    /// Apply an Euler(pitch, yaw, 0) rotation, both in degrees.
    fn set_rotation(&mut self, pitch: f32, yaw: f32);
}

/// Orbiting third-person camera driven by pitch/yaw.
///
/// ## Usage
/// ```rust,ignore
/// let mut camera = ThirdPersonCamera::new();
/// camera.set_rotation(10.0, 45.0);
/// camera.follow(player_position);
///
/// let eye = camera.position();
/// let look = camera.forward();
/// ```
#[derive(Clone, Debug)]
pub struct ThirdPersonCamera {
    /// Horizontal angle in degrees, unbounded
    pub yaw: f32,
    /// Vertical angle in degrees, positive looks down
    pub pitch: f32,
    /// Distance behind the pivot
    pub distance: f32,
    /// Height of the pivot above the followed point
    pub pivot_height: f32,
    position: Vec3,
}

impl Default for ThirdPersonCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: 4.0,
            pivot_height: 1.6,
            position: Vec3::new(0.0, 1.6, 4.0),
        }
    }
}

impl ThirdPersonCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera orbiting at `distance` meters.
    pub fn with_distance(distance: f32) -> Self {
        Self {
            distance,
            ..Default::default()
        }
    }

    /// Camera orientation as a quaternion.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(-self.yaw.to_radians()) * Quat::from_rotation_x(-self.pitch.to_radians())
    }

    /// Up direction, perpendicular to forward and right.
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    /// Last position computed by [`Self::follow`].
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Place the camera `distance` meters behind the pivot above `target`.
    pub fn follow(&mut self, target: Vec3) -> Vec3 {
        let pivot = target + Vec3::Y * self.pivot_height;
        self.position = pivot - self.forward() * self.distance;
        self.position
    }
}

impl CameraRig for ThirdPersonCamera {
    fn forward(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        Vec3::new(
            yaw.sin() * pitch.cos(),
            -pitch.sin(),
            -yaw.cos() * pitch.cos(),
        )
        .normalize()
    }

    fn right(&self) -> Vec3 {
        // No roll: right stays on the horizontal plane
        let yaw = self.yaw.to_radians();
        Vec3::new(yaw.cos(), 0.0, yaw.sin())
    }

    fn set_rotation(&mut self, pitch: f32, yaw: f32) {
        self.pitch = pitch;
        self.yaw = yaw;
    }
}
