/// Shared animation controls: the pause flag and the speed multiplier.
///
/// Owned by the engine context and passed by reference into the step task and
/// the control-panel handlers, never ambient module state, so the step
/// function stays unit-testable in isolation.

/// Slider range exposed by the control panel. The widget enforces these; the
/// state itself performs no validation.
pub const SPEED_MIN: f32 = 0.0;
pub const SPEED_MAX: f32 = 5.0;
pub const SPEED_STEP: f32 = 0.1;
pub const SPEED_DEFAULT: f32 = 1.0;

#[derive(Debug, Clone, Copy)]
pub struct AnimationState {
    /// Whether body updates run this step. Camera damping and rendering
    /// proceed regardless.
    pub running: bool,
    /// Scales every body's per-step rotation and orbit advance.
    pub speed_multiplier: f32,
}

impl AnimationState {
    pub fn new() -> Self {
        Self {
            running: true,
            speed_multiplier: SPEED_DEFAULT,
        }
    }

    /// Flip between running and paused. Returns the new button label.
    pub fn toggle(&mut self) -> &'static str {
        self.running = !self.running;
        self.toggle_label()
    }

    pub fn set_speed(&mut self, multiplier: f32) {
        self.speed_multiplier = multiplier;
    }

    /// Slider readout, one decimal place with an "x" suffix.
    pub fn readout(&self) -> String {
        format!("{:.1}x", self.speed_multiplier)
    }

    /// Label for the pause/resume button, reflecting the current state.
    pub fn toggle_label(&self) -> &'static str {
        if self.running {
            "Pause Animation"
        } else {
            "Resume Animation"
        }
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running_at_default_speed() {
        let state = AnimationState::new();
        assert!(state.running);
        assert_eq!(state.speed_multiplier, SPEED_DEFAULT);
        assert_eq!(state.toggle_label(), "Pause Animation");
    }

    #[test]
    fn toggle_twice_returns_to_running() {
        let mut state = AnimationState::new();
        assert_eq!(state.toggle(), "Resume Animation");
        assert!(!state.running);
        assert_eq!(state.toggle(), "Pause Animation");
        assert!(state.running);
    }

    #[test]
    fn readout_is_one_decimal_with_suffix() {
        let mut state = AnimationState::new();
        assert_eq!(state.readout(), "1.0x");
        state.set_speed(2.3);
        assert_eq!(state.readout(), "2.3x");
        state.set_speed(0.0);
        assert_eq!(state.readout(), "0.0x");
    }
}
