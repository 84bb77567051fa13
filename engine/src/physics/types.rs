//! Physics type re-exports from glam and orientation conventions
//!
//! Yaw angles are in degrees. Yaw 0 faces -Z and positive yaw turns
//! clockwise when seen from above (toward +X), matching the camera code.

pub use glam::{Quat, Vec2, Vec3};

/// Rotation about world up for a yaw angle in degrees.
pub fn yaw_rotation(yaw_degrees: f32) -> Quat {
    Quat::from_rotation_y(-yaw_degrees.to_radians())
}

/// Forward direction on the XZ plane for a yaw angle in degrees.
pub fn yaw_forward(yaw_degrees: f32) -> Vec3 {
    let yaw = yaw_degrees.to_radians();
    Vec3::new(yaw.sin(), 0.0, -yaw.cos())
}

/// Yaw in degrees (-180, 180] of a rotation's forward axis.
///
/// Returns 0 when the forward axis is vertical.
pub fn yaw_of(rotation: Quat) -> f32 {
    let forward = rotation * Vec3::NEG_Z;
    if forward.x.abs() < 1e-6 && forward.z.abs() < 1e-6 {
        return 0.0;
    }
    forward.x.atan2(-forward.z).to_degrees()
}

/// Drop the vertical component and renormalize. Zero stays zero.
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaw_zero_faces_negative_z() {
        let forward = yaw_rotation(0.0) * Vec3::NEG_Z;
        assert!((forward - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_positive_yaw_turns_toward_positive_x() {
        let forward = yaw_rotation(90.0) * Vec3::NEG_Z;
        assert!((forward - Vec3::X).length() < 1e-5);
        assert!((yaw_forward(90.0) - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_yaw_of_inverts_yaw_rotation() {
        for yaw in [-135.0, -45.0, 0.0, 30.0, 170.0] {
            assert!((yaw_of(yaw_rotation(yaw)) - yaw).abs() < 1e-3, "yaw {yaw}");
        }
    }

    #[test]
    fn test_flatten_zero_and_vertical() {
        assert_eq!(flatten(Vec3::ZERO), Vec3::ZERO);
        assert_eq!(flatten(Vec3::Y), Vec3::ZERO);
        assert!((flatten(Vec3::new(3.0, 5.0, 4.0)) - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-5);
    }
}
