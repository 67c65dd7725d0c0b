//! Motion tokens for the toggle transitions

use dusk_animation::{Easing, TimingConfig};

/// Leg duration used by every toggle transition
pub const TOGGLE_DURATION_MS: u32 = 600;

/// Peak of the active-state scale pulse
pub const PULSE_PEAK: f32 = 1.3;

/// Values a scalar settles on in each toggle state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateTargets {
    /// Inactive (initial) value
    pub rest: f32,
    /// Active value
    pub active: f32,
}

impl StateTargets {
    pub const fn new(rest: f32, active: f32) -> Self {
        Self { rest, active }
    }

    pub fn for_state(&self, is_active: bool) -> f32 {
        if is_active {
            self.active
        } else {
            self.rest
        }
    }
}

/// Complete set of motion tokens for one screen variant
#[derive(Clone, Debug, PartialEq)]
pub struct MotionTokens {
    /// Duration and easing of a single leg
    pub timing: TimingConfig,
    pub color_phase: StateTargets,
    /// `active` is the pulse base; the pulse runs from there to `pulse_peak`
    pub scale: StateTargets,
    pub pulse_peak: f32,
    pub progress: StateTargets,
    pub opacity: StateTargets,
}

impl MotionTokens {
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_pulse_peak(mut self, peak: f32) -> Self {
        self.pulse_peak = peak;
        self
    }
}

impl Default for MotionTokens {
    fn default() -> Self {
        Self {
            timing: TimingConfig::new(TOGGLE_DURATION_MS, Easing::Ease),
            color_phase: StateTargets::new(0.0, 1.0),
            scale: StateTargets::new(1.0, 1.0),
            pulse_peak: PULSE_PEAK,
            progress: StateTargets::new(1.0, 0.5),
            opacity: StateTargets::new(0.2, 1.0),
        }
    }
}
