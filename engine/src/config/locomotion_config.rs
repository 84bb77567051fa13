//! Locomotion Configuration
//!
//! All tunables of the locomotion core in one serde-backed struct.
//! `LocomotionConfig::default()` returns the stock character; a JSON file only
//! needs to name the fields it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// How the sprint input maps onto the sprint toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SprintMode {
    /// Sprint is on while the button is held.
    #[default]
    Hold,
    /// Each press flips sprint on/off.
    Toggle,
}

/// Which lateral states the state machine may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocomotionVariant {
    /// Walking is reachable through the walk toggle or strongly lateral input.
    #[default]
    WalkCapable,
    /// No walking state: moving input always runs or sprints.
    SprintOnly,
}

/// Tunable parameters for the locomotion core.
///
/// Angles are in degrees, speeds in m/s, accelerations in m/s^2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    pub walk_acceleration: f32,
    pub walk_speed: f32,
    pub run_acceleration: f32,
    pub run_speed: f32,
    pub sprint_acceleration: f32,
    pub sprint_speed: f32,
    /// Constant deceleration applied against the lateral velocity.
    pub drag: f32,
    /// Jump height factor; impulse is `sqrt(jump_speed * 3 * gravity)`.
    pub jump_speed: f32,
    pub gravity: f32,

    /// Interpolation rate used when turning the character toward its target yaw.
    pub player_rotation_speed: f32,
    /// Duration of an idle snap rotation in seconds.
    pub rotate_to_target_time: f32,

    /// Degrees of yaw per unit of horizontal look input.
    pub look_sensitivity_h: f32,
    /// Degrees of pitch per unit of vertical look input.
    pub look_sensitivity_v: f32,
    /// Pitch is clamped to +-this many degrees.
    pub look_limit_v: f32,

    /// Smoothing rate of the animation blend input.
    pub movement_blend_speed: f32,

    pub sprint_mode: SprintMode,
    pub variant: LocomotionVariant,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            walk_acceleration: 0.15,
            walk_speed: 3.0,
            run_acceleration: 0.25,
            run_speed: 6.0,
            sprint_acceleration: 0.5,
            sprint_speed: 9.0,
            drag: 0.1,
            jump_speed: 1.0,
            gravity: 25.0,
            player_rotation_speed: 10.0,
            rotate_to_target_time: 0.25,
            look_sensitivity_h: 0.1,
            look_sensitivity_v: 0.1,
            look_limit_v: 80.0,
            movement_blend_speed: 4.0,
            sprint_mode: SprintMode::Hold,
            variant: LocomotionVariant::WalkCapable,
        }
    }
}

/// Errors raised while loading a [`LocomotionConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io(std::io::Error),
    /// The file is not valid JSON for this struct.
    Json(serde_json::Error),
    /// A field holds a value the core cannot run with.
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid config field `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl LocomotionConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from a JSON string and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&data)?;
        tracing::debug!(path = %path.display(), "loaded locomotion config");
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the core does not guard against at runtime.
    ///
    /// Every numeric tunable must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields: [(&'static str, f32); 15] = [
            ("walk_acceleration", self.walk_acceleration),
            ("walk_speed", self.walk_speed),
            ("run_acceleration", self.run_acceleration),
            ("run_speed", self.run_speed),
            ("sprint_acceleration", self.sprint_acceleration),
            ("sprint_speed", self.sprint_speed),
            ("drag", self.drag),
            ("jump_speed", self.jump_speed),
            ("gravity", self.gravity),
            ("player_rotation_speed", self.player_rotation_speed),
            ("rotate_to_target_time", self.rotate_to_target_time),
            ("look_sensitivity_h", self.look_sensitivity_h),
            ("look_sensitivity_v", self.look_sensitivity_v),
            ("look_limit_v", self.look_limit_v),
            ("movement_blend_speed", self.movement_blend_speed),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be finite",
                });
            }
            if value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must not be negative",
                });
            }
        }

        if self.look_limit_v > 90.0 {
            return Err(ConfigError::Invalid {
                field: "look_limit_v",
                reason: "must not exceed 90 degrees",
            });
        }

        Ok(())
    }

    /// Upward velocity added by a grounded jump.
    pub fn jump_impulse(&self) -> f32 {
        (self.jump_speed * 3.0 * self.gravity).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = LocomotionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sprint_mode, SprintMode::Hold);
        assert_eq!(config.variant, LocomotionVariant::WalkCapable);
    }

    #[test]
    fn test_jump_impulse() {
        let config = LocomotionConfig::default();
        // sqrt(1 * 3 * 25)
        assert!((config.jump_impulse() - 75.0_f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            LocomotionConfig::from_json_str(r#"{ "run_speed": 7.5, "sprint_mode": "toggle" }"#)
                .unwrap();
        assert_eq!(config.run_speed, 7.5);
        assert_eq!(config.sprint_mode, SprintMode::Toggle);
        assert_eq!(config.walk_speed, LocomotionConfig::default().walk_speed);
    }

    #[test]
    fn test_variant_from_json() {
        let config = LocomotionConfig::from_json_str(r#"{ "variant": "sprint_only" }"#).unwrap();
        assert_eq!(config.variant, LocomotionVariant::SprintOnly);
    }

    #[test]
    fn test_negative_value_rejected() {
        let err = LocomotionConfig::from_json_str(r#"{ "gravity": -9.8 }"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "gravity"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_look_limit_above_ninety_rejected() {
        let err = LocomotionConfig::from_json_str(r#"{ "look_limit_v": 120.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "look_limit_v",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = LocomotionConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_missing_file() {
        let err = LocomotionConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = LocomotionConfig {
            drag: 2.0,
            variant: LocomotionVariant::SprintOnly,
            ..LocomotionConfig::default()
        };
        let json = config.to_json_string().unwrap();
        assert_eq!(LocomotionConfig::from_json_str(&json).unwrap(), config);
    }
}
