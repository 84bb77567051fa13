//! Movement State
//!
//! Discrete locomotion state of the character and the ordered transition
//! table that selects it each tick.
//!
//! # Transition Priority
//!
//! Rules are evaluated top to bottom; the first guard that holds wins.
//!
//! | # | Target    | Guard                                                        |
//! |---|-----------|--------------------------------------------------------------|
//! | 1 | Jumping   | body not grounded and body vertical velocity > 0             |
//! | 2 | Falling   | body not grounded                                            |
//! | 3 | Walking   | walk-capable and (walk toggle, or moving laterally and !canRun) |
//! | 4 | Sprinting | sprint toggle and moving laterally                           |
//! | 5 | Running   | moving laterally or movement input pressed                   |
//! | - | Idling    | fallback                                                     |
//!
//! Airborne rules sit first so they supersede any lateral classification.
//! An airborne body with exactly zero vertical velocity counts as Falling.

use crate::config::LocomotionVariant;

/// Locomotion state of the character, mutated once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovementState {
    #[default]
    Idling,
    Walking,
    Running,
    Sprinting,
    Jumping,
    Falling,
    /// Reserved for directional strafing animation sets; never produced.
    Strafing,
}

impl MovementState {
    /// Whether this state belongs to the grounded set.
    pub const fn is_grounded(self) -> bool {
        match self {
            MovementState::Idling
            | MovementState::Walking
            | MovementState::Running
            | MovementState::Sprinting => true,
            MovementState::Jumping | MovementState::Falling | MovementState::Strafing => false,
        }
    }

    pub const fn is_airborne(self) -> bool {
        matches!(self, MovementState::Jumping | MovementState::Falling)
    }
}

/// Everything the transition guards look at for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocomotionSignals {
    /// Grounded flag reported by the body.
    pub body_grounded: bool,
    /// Vertical component of the body's velocity.
    pub body_vertical_velocity: f32,
    /// Horizontal body speed is above the dead zone.
    pub is_moving_laterally: bool,
    pub is_movement_pressed: bool,
    /// Input is forward-biased enough to permit running.
    pub can_run: bool,
    pub walk_toggle_on: bool,
    pub sprint_toggle_on: bool,
    pub variant: LocomotionVariant,
}

/// A guarded transition into `target`.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub target: MovementState,
    pub guard: fn(&LocomotionSignals) -> bool,
}

fn rising(s: &LocomotionSignals) -> bool {
    !s.body_grounded && s.body_vertical_velocity > 0.0
}

fn airborne(s: &LocomotionSignals) -> bool {
    !s.body_grounded
}

fn walking(s: &LocomotionSignals) -> bool {
    s.variant == LocomotionVariant::WalkCapable
        && (s.walk_toggle_on || (s.is_moving_laterally && !s.can_run))
}

fn sprinting(s: &LocomotionSignals) -> bool {
    s.sprint_toggle_on && s.is_moving_laterally
}

fn running(s: &LocomotionSignals) -> bool {
    s.is_moving_laterally || s.is_movement_pressed
}

/// Ordered transition table, highest priority first.
pub const TRANSITION_PRIORITY: [Transition; 5] = [
    Transition {
        target: MovementState::Jumping,
        guard: rising,
    },
    Transition {
        target: MovementState::Falling,
        guard: airborne,
    },
    Transition {
        target: MovementState::Walking,
        guard: walking,
    },
    Transition {
        target: MovementState::Sprinting,
        guard: sprinting,
    },
    Transition {
        target: MovementState::Running,
        guard: running,
    },
];

/// Pick the state for this tick from the transition table.
pub fn classify(signals: &LocomotionSignals) -> MovementState {
    TRANSITION_PRIORITY
        .iter()
        .find(|transition| (transition.guard)(signals))
        .map_or(MovementState::Idling, |transition| transition.target)
}
