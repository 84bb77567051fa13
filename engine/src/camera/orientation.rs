//! Camera & Orientation Reconciler
//!
//! Turns look input into camera pitch/yaw and keeps the character's facing
//! in step with the camera:
//!
//! - **Moving** (any state but Idling): the character turns toward the
//!   target yaw every tick.
//! - **Idling**: the character holds still until the camera is more than
//!   [`IDLE_ROTATION_TOLERANCE`] degrees off its facing, then a timed snap
//!   turns it back toward the camera.
//!
//! # Idle Snap Rule
//!
//! The tolerance is checked against the mismatch left by the previous tick,
//! before any rotation is applied this tick:
//!
//! ```text
//! rotating = timer > 0                      // read before decrement
//! if |mismatch| > 90 or rotating:
//!     if |mismatch| > 90:
//!         timer = rotate_to_target_time     // (re)arm
//!         clockwise = mismatch > 90
//!     timer -= dt
//!     turn only while mismatch keeps the armed sign
//! ```
//!
//! The direction gate stops the snap as soon as the character has swung past
//! the camera heading, so it never overshoots into a turn the other way.

use glam::{Quat, Vec2, Vec3};

use crate::config::LocomotionConfig;
use crate::physics::{CharacterBody, flatten, yaw_of, yaw_rotation};
use crate::player::MovementState;

use super::controller::CameraRig;

/// Mismatch in degrees beyond which an idle character snaps to the camera.
pub const IDLE_ROTATION_TOLERANCE: f32 = 90.0;

/// Signed horizontal angle in degrees from `character_forward` to `camera_forward`.
///
/// The camera direction is projected onto the horizontal plane first. The
/// result lies in (-180, 180]; positive means the camera is clockwise of the
/// character when seen from `up`. Degenerate inputs give 0.
pub fn signed_yaw_mismatch(character_forward: Vec3, camera_forward: Vec3, up: Vec3) -> f32 {
    let projected = flatten(camera_forward);
    let forward = character_forward.normalize_or_zero();
    if projected == Vec3::ZERO || forward == Vec3::ZERO {
        return 0.0;
    }

    let angle = forward.dot(projected).clamp(-1.0, 1.0).acos().to_degrees();
    if angle >= 180.0 {
        return 180.0;
    }

    // Right-handed world: camera x character points along up for a clockwise camera
    let sign = if projected.cross(forward).dot(up) >= 0.0 {
        1.0
    } else {
        -1.0
    };
    sign * angle
}

/// Outputs of one reconciler tick, read by the animation mapper.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientationReport {
    pub rotation_mismatch: f32,
    pub is_rotating_to_target: bool,
}

/// Camera and character yaw reconciliation.
#[derive(Debug, Clone)]
pub struct OrientationReconciler {
    look_sensitivity_h: f32,
    look_sensitivity_v: f32,
    look_limit_v: f32,
    player_rotation_speed: f32,
    rotate_to_target_time: f32,

    /// Camera yaw in degrees, unbounded
    camera_yaw: f32,
    /// Camera pitch in degrees, within +-look_limit_v
    camera_pitch: f32,

    /// Yaw the character turns toward, in degrees
    target_yaw: f32,

    rotation_mismatch: f32,
    is_rotating_to_target: bool,
    /// Remaining idle snap time; may go negative once a snap ends
    rotating_to_target_timer: f32,
    is_rotating_clockwise: bool,
}

impl Default for OrientationReconciler {
    fn default() -> Self {
        Self::new(&LocomotionConfig::default())
    }
}

impl OrientationReconciler {
    pub fn new(config: &LocomotionConfig) -> Self {
        Self {
            look_sensitivity_h: config.look_sensitivity_h,
            look_sensitivity_v: config.look_sensitivity_v,
            look_limit_v: config.look_limit_v,
            player_rotation_speed: config.player_rotation_speed,
            rotate_to_target_time: config.rotate_to_target_time,
            camera_yaw: 0.0,
            camera_pitch: 0.0,
            target_yaw: 0.0,
            rotation_mismatch: 0.0,
            is_rotating_to_target: false,
            rotating_to_target_timer: 0.0,
            is_rotating_clockwise: false,
        }
    }

    /// Swap tunables at runtime. Camera and snap state are kept.
    pub fn apply_config(&mut self, config: &LocomotionConfig) {
        self.look_sensitivity_h = config.look_sensitivity_h;
        self.look_sensitivity_v = config.look_sensitivity_v;
        self.look_limit_v = config.look_limit_v;
        self.player_rotation_speed = config.player_rotation_speed;
        self.rotate_to_target_time = config.rotate_to_target_time;
        self.camera_pitch = self.camera_pitch.clamp(-self.look_limit_v, self.look_limit_v);
    }

    /// Point camera and target at the body's current facing.
    pub fn sync_to_body(&mut self, body: &impl CharacterBody) {
        let yaw = yaw_of(body.rotation());
        self.camera_yaw = yaw;
        self.target_yaw = yaw;
        self.rotation_mismatch = 0.0;
        self.rotating_to_target_timer = 0.0;
        self.is_rotating_to_target = false;
    }

    pub fn camera_yaw(&self) -> f32 {
        self.camera_yaw
    }

    pub fn camera_pitch(&self) -> f32 {
        self.camera_pitch
    }

    pub fn target_yaw(&self) -> f32 {
        self.target_yaw
    }

    pub fn rotation_mismatch(&self) -> f32 {
        self.rotation_mismatch
    }

    pub fn is_rotating_to_target(&self) -> bool {
        self.is_rotating_to_target
    }

    pub fn rotating_to_target_timer(&self) -> f32 {
        self.rotating_to_target_timer
    }

    pub fn report(&self) -> OrientationReport {
        OrientationReport {
            rotation_mismatch: self.rotation_mismatch,
            is_rotating_to_target: self.is_rotating_to_target,
        }
    }

    /// Run one tick. Must run after the state machine has classified `state`.
    pub fn update(
        &mut self,
        dt: f32,
        look: Vec2,
        state: MovementState,
        body: &mut impl CharacterBody,
        camera: &mut impl CameraRig,
    ) -> OrientationReport {
        let yaw_delta = self.look_sensitivity_h * look.x;
        self.camera_yaw += yaw_delta;
        self.camera_pitch = (self.camera_pitch - self.look_sensitivity_v * look.y)
            .clamp(-self.look_limit_v, self.look_limit_v);

        self.target_yaw += yaw_delta;

        self.is_rotating_to_target = self.rotating_to_target_timer > 0.0;
        if state != MovementState::Idling {
            self.rotate_toward_target(dt, body);
        } else if self.rotation_mismatch.abs() > IDLE_ROTATION_TOLERANCE
            || self.is_rotating_to_target
        {
            self.update_idle_rotation(dt, body);
        }

        camera.set_rotation(self.camera_pitch, self.camera_yaw);

        self.rotation_mismatch = signed_yaw_mismatch(body.forward(), camera.forward(), body.up());
        self.report()
    }

    fn update_idle_rotation(&mut self, dt: f32, body: &mut impl CharacterBody) {
        if self.rotation_mismatch.abs() > IDLE_ROTATION_TOLERANCE {
            self.rotating_to_target_timer = self.rotate_to_target_time;
            self.is_rotating_clockwise = self.rotation_mismatch > IDLE_ROTATION_TOLERANCE;
            tracing::debug!(
                mismatch = self.rotation_mismatch,
                clockwise = self.is_rotating_clockwise,
                "idle snap armed"
            );
        }
        self.rotating_to_target_timer -= dt;

        let same_side = if self.is_rotating_clockwise {
            self.rotation_mismatch > 0.0
        } else {
            self.rotation_mismatch < 0.0
        };
        if same_side {
            self.rotate_toward_target(dt, body);
        }
    }

    fn rotate_toward_target(&self, dt: f32, body: &mut impl CharacterBody) {
        let target: Quat = yaw_rotation(self.target_yaw);
        let t = (self.player_rotation_speed * dt).clamp(0.0, 1.0);
        body.set_rotation(body.rotation().lerp(target, t));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_vectors_have_zero_mismatch() {
        assert_eq!(signed_yaw_mismatch(Vec3::NEG_Z, Vec3::NEG_Z, Vec3::Y), 0.0);
    }

    #[test]
    fn test_clockwise_camera_is_positive() {
        let mismatch = signed_yaw_mismatch(Vec3::NEG_Z, Vec3::X, Vec3::Y);
        assert!((mismatch - 90.0).abs() < 1e-3);

        let mismatch = signed_yaw_mismatch(Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y);
        assert!((mismatch + 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_swapping_arguments_flips_sign() {
        let a = Vec3::new(0.3, 0.0, -1.0).normalize();
        let b = Vec3::new(-0.8, 0.0, 0.2).normalize();
        let ab = signed_yaw_mismatch(a, b, Vec3::Y);
        let ba = signed_yaw_mismatch(b, a, Vec3::Y);
        assert!((ab + ba).abs() < 1e-3);
        assert!(ab != 0.0);
    }

    #[test]
    fn test_opposite_vectors_are_positive_half_turn() {
        let mismatch = signed_yaw_mismatch(Vec3::NEG_Z, Vec3::Z, Vec3::Y);
        assert!((mismatch - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_camera_pitch_is_ignored() {
        let pitched = Vec3::new(1.0, -1.0, 0.0).normalize();
        let mismatch = signed_yaw_mismatch(Vec3::NEG_Z, pitched, Vec3::Y);
        assert!((mismatch - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_vertical_camera_gives_zero() {
        assert_eq!(signed_yaw_mismatch(Vec3::NEG_Z, Vec3::NEG_Y, Vec3::Y), 0.0);
    }

    #[test]
    fn test_mismatch_range() {
        for i in 0..72 {
            let yaw = i as f32 * 5.0 - 180.0;
            let camera = crate::physics::yaw_forward(yaw);
            let mismatch = signed_yaw_mismatch(Vec3::NEG_Z, camera, Vec3::Y);
            assert!(mismatch > -180.0 && mismatch <= 180.0, "yaw {yaw} -> {mismatch}");
        }
    }

    #[test]
    fn test_default_reconciler() {
        let reconciler = OrientationReconciler::default();
        assert_eq!(reconciler.camera_yaw(), 0.0);
        assert_eq!(reconciler.camera_pitch(), 0.0);
        assert_eq!(reconciler.rotation_mismatch(), 0.0);
        assert!(!reconciler.is_rotating_to_target());
    }
}
