//! Single eased transitions from one value to another

use crate::easing::Easing;

/// Duration and curve for a timed transition (or one leg of an oscillation)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingConfig {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl TimingConfig {
    pub const fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for TimingConfig {
    /// 300ms in-out quad, the usual default for UI timings
    fn default() -> Self {
        Self::new(300, Easing::EaseInOutQuad)
    }
}

/// A timed transition anchored on the scheduler clock
#[derive(Clone, Debug, PartialEq)]
pub struct Timing {
    from: f32,
    to: f32,
    start_ms: f64,
    config: TimingConfig,
}

impl Timing {
    pub fn new(from: f32, to: f32, start_ms: f64, config: TimingConfig) -> Self {
        Self {
            from,
            to,
            start_ms,
            config,
        }
    }

    pub fn to(&self) -> f32 {
        self.to
    }

    /// Linear progress through the timing (0.0 to 1.0)
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.config.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms - self.start_ms;
        (elapsed / self.config.duration_ms as f64).clamp(0.0, 1.0) as f32
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Sample the eased value at `now_ms`
    pub fn value_at(&self, now_ms: f64) -> f32 {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return self.to;
        }
        if progress <= 0.0 {
            return self.from;
        }
        let eased = self.config.easing.apply(progress);
        self.from + (self.to - self.from) * eased
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_lands_exactly_on_target() {
        let timing = Timing::new(0.2, 1.0, 100.0, TimingConfig::new(600, Easing::Ease));

        assert_eq!(timing.value_at(100.0), 0.2);
        assert_eq!(timing.value_at(700.0), 1.0);
        assert_eq!(timing.value_at(5_000.0), 1.0);
        assert!(timing.is_finished(700.0));
        assert!(!timing.is_finished(699.0));
    }

    #[test]
    fn test_timing_before_start_holds_origin() {
        let timing = Timing::new(1.0, 0.5, 1_000.0, TimingConfig::default());
        assert_eq!(timing.value_at(0.0), 1.0);
        assert_eq!(timing.progress(0.0), 0.0);
    }

    #[test]
    fn test_timing_linear_midpoint() {
        let timing = Timing::new(0.0, 10.0, 0.0, TimingConfig::new(200, Easing::Linear));
        assert!((timing.value_at(100.0) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let timing = Timing::new(3.0, 7.0, 0.0, TimingConfig::new(0, Easing::Ease));
        assert_eq!(timing.value_at(0.0), 7.0);
        assert!(timing.is_finished(0.0));
    }
}
