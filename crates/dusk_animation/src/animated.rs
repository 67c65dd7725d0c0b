//! Animated scalar values
//!
//! An [`AnimatedScalar`] is a plain number plus the transition currently
//! driving it. Issuing a new transition first samples the old one at the
//! same instant, so the new transition always starts from the value that
//! was on screen.

use crate::oscillation::{Iterations, Oscillation};
use crate::timing::{Timing, TimingConfig};

/// The transition attached to a scalar
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    Timing(Timing),
    Oscillation(Oscillation),
}

impl Transition {
    pub fn value_at(&self, now_ms: f64) -> f32 {
        match self {
            Transition::Timing(t) => t.value_at(now_ms),
            Transition::Oscillation(o) => o.value_at(now_ms),
        }
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        match self {
            Transition::Timing(t) => t.is_finished(now_ms),
            Transition::Oscillation(o) => o.is_finished(now_ms),
        }
    }

    pub fn target(&self) -> TransitionTarget {
        match self {
            Transition::Timing(t) => TransitionTarget::Value(t.to()),
            Transition::Oscillation(o) => TransitionTarget::Between {
                base: o.base(),
                peak: o.peak(),
                infinite: o.iterations().is_infinite(),
            },
        }
    }
}

/// Where a scalar is headed
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionTarget {
    /// Settles on a single value
    Value(f32),
    /// Alternates between two bounds
    Between { base: f32, peak: f32, infinite: bool },
}

impl TransitionTarget {
    /// The settled value, if this target settles
    pub fn value(&self) -> Option<f32> {
        match self {
            TransitionTarget::Value(v) => Some(*v),
            TransitionTarget::Between { .. } => None,
        }
    }

    pub fn is_oscillating(&self) -> bool {
        matches!(self, TransitionTarget::Between { .. })
    }
}

/// A numeric value driven by at most one transition at a time
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedScalar {
    value: f32,
    transition: Option<Transition>,
}

impl AnimatedScalar {
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            transition: None,
        }
    }

    /// The value as of the last sample
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Target of the most recent transition, or the resting value
    pub fn target(&self) -> TransitionTarget {
        match &self.transition {
            Some(transition) => transition.target(),
            None => TransitionTarget::Value(self.value),
        }
    }

    /// Advance to `now_ms` and return the new value
    pub fn sample(&mut self, now_ms: f64) -> f32 {
        if let Some(transition) = &self.transition {
            self.value = transition.value_at(now_ms);
        }
        self.value
    }

    /// Still moving at `now_ms`
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.transition
            .as_ref()
            .map(|t| !t.is_finished(now_ms))
            .unwrap_or(false)
    }

    /// Jump to `value`, dropping any transition
    pub fn set_immediate(&mut self, value: f32) {
        self.value = value;
        self.transition = None;
    }

    /// Replace the current transition with a timing toward `to`
    pub fn animate_to(&mut self, to: f32, config: TimingConfig, now_ms: f64) {
        let from = self.sample(now_ms);
        self.transition = Some(Transition::Timing(Timing::new(from, to, now_ms, config)));
    }

    /// Replace the current transition with an oscillation between `base` and `peak`
    pub fn oscillate(
        &mut self,
        base: f32,
        peak: f32,
        leg: TimingConfig,
        iterations: Iterations,
        now_ms: f64,
    ) {
        let entry = self.sample(now_ms);
        self.transition = Some(Transition::Oscillation(Oscillation::new(
            entry, base, peak, now_ms, leg, iterations,
        )));
    }
}
