//! Input Sampler
//!
//! Collects the raw movement/look/sprint/walk/jump signals reported by the
//! host between ticks and hands the locomotion core one immutable
//! [`InputSample`] per tick.
//!
//! Level signals (movement, sprint, walk) persist until the host reports a new
//! value. Per-tick signals (look delta, jump pulse) are cleared by
//! [`InputSampler::end_tick`] whether or not anything consumed them.

use glam::Vec2;

use crate::config::SprintMode;

/// Snapshot of player intent for a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSample {
    /// Strafe (x) and forward (y) input, each axis in [-1, 1].
    pub movement: Vec2,
    /// Raw look delta for this tick.
    pub look: Vec2,
    pub sprint_toggle_on: bool,
    pub walk_toggle_on: bool,
    /// True only for the tick following a jump press.
    pub jump_pressed: bool,
}

impl InputSample {
    /// Whether any directional input is held.
    pub fn is_movement_pressed(&self) -> bool {
        self.movement != Vec2::ZERO
    }
}

/// Accumulates input events between ticks.
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    current: InputSample,
    sprint_mode: SprintMode,
}

impl InputSampler {
    /// Create a sampler with hold-to-sprint semantics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sampler with the given sprint semantics.
    pub fn with_sprint_mode(sprint_mode: SprintMode) -> Self {
        Self {
            sprint_mode,
            ..Default::default()
        }
    }

    pub fn sprint_mode(&self) -> SprintMode {
        self.sprint_mode
    }

    /// Report the latest movement vector. Axes are clamped to [-1, 1].
    pub fn on_move(&mut self, movement: Vec2) {
        self.current.movement = movement.clamp(Vec2::NEG_ONE, Vec2::ONE);
    }

    /// Report this tick's look delta. Overwrites, does not accumulate.
    pub fn on_look(&mut self, delta: Vec2) {
        self.current.look = delta;
    }

    /// Report a sprint button edge.
    ///
    /// * `Hold`: sprint follows the button.
    /// * `Toggle`: each press flips sprint, releases are ignored.
    pub fn on_sprint(&mut self, pressed: bool) {
        let on = self.current.sprint_toggle_on;
        self.current.sprint_toggle_on = match (self.sprint_mode, pressed) {
            (SprintMode::Hold, pressed) => pressed,
            (SprintMode::Toggle, true) => !on,
            (SprintMode::Toggle, false) => on,
        };
    }

    /// Report a walk toggle press. Each press flips walking.
    pub fn on_walk_toggle(&mut self) {
        self.current.walk_toggle_on = !self.current.walk_toggle_on;
    }

    /// Report a jump button edge. Only presses raise the pulse.
    pub fn on_jump(&mut self, pressed: bool) {
        if pressed {
            self.current.jump_pressed = true;
        }
    }

    /// The sample the core should read this tick.
    pub fn sample(&self) -> InputSample {
        self.current
    }

    /// Clear the per-tick signals. Call once after every tick.
    pub fn end_tick(&mut self) {
        self.current.jump_pressed = false;
        self.current.look = Vec2::ZERO;
    }

    /// Drop all held input (focus loss, respawn).
    pub fn reset(&mut self) {
        self.current = InputSample::default();
    }
}
