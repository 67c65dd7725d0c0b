//! Ping-pong oscillation between two bounds
//!
//! An oscillation is a sequence of equal-length eased legs. The first leg
//! runs from wherever the value was when the oscillation was issued up to
//! `peak`; after that the legs alternate `peak -> base` and `base -> peak`.
//!
//! ```text
//! entry ──▶ peak ──▶ base ──▶ peak ──▶ base ...
//!   leg 0    leg 1    leg 2    leg 3
//! ```

use crate::timing::TimingConfig;

/// How many legs an oscillation runs before it stops
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Iterations {
    /// Repeat until superseded by another transition
    Infinite,
    /// Stop after this many legs (the entry leg counts as one)
    Count(u32),
}

impl Iterations {
    pub fn is_infinite(&self) -> bool {
        matches!(self, Iterations::Infinite)
    }
}

/// Alternating transition between `base` and `peak`
#[derive(Clone, Debug, PartialEq)]
pub struct Oscillation {
    entry: f32,
    base: f32,
    peak: f32,
    start_ms: f64,
    leg: TimingConfig,
    iterations: Iterations,
}

impl Oscillation {
    pub fn new(
        entry: f32,
        base: f32,
        peak: f32,
        start_ms: f64,
        leg: TimingConfig,
        iterations: Iterations,
    ) -> Self {
        Self {
            entry,
            base,
            peak,
            start_ms,
            leg,
            iterations,
        }
    }

    pub fn base(&self) -> f32 {
        self.base
    }

    pub fn peak(&self) -> f32 {
        self.peak
    }

    pub fn iterations(&self) -> Iterations {
        self.iterations
    }

    fn leg_ms(&self) -> f64 {
        self.leg.duration_ms.max(1) as f64
    }

    /// Start and end values of leg `index`
    fn leg_endpoints(&self, index: u64) -> (f32, f32) {
        match index {
            0 => (self.entry, self.peak),
            i if i % 2 == 1 => (self.peak, self.base),
            _ => (self.base, self.peak),
        }
    }

    /// Index of the leg running at `now_ms` (0 before the start)
    pub fn leg_index(&self, now_ms: f64) -> u64 {
        let elapsed = (now_ms - self.start_ms).max(0.0);
        (elapsed / self.leg_ms()).floor() as u64
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        match self.iterations {
            Iterations::Infinite => false,
            Iterations::Count(legs) => self.leg_index(now_ms) >= legs as u64,
        }
    }

    /// Sample the oscillating value at `now_ms`
    pub fn value_at(&self, now_ms: f64) -> f32 {
        let elapsed = now_ms - self.start_ms;
        if elapsed <= 0.0 {
            return self.entry;
        }

        let leg = self.leg_index(now_ms);
        if let Iterations::Count(legs) = self.iterations {
            if legs == 0 {
                return self.entry;
            }
            if leg >= legs as u64 {
                return self.leg_endpoints(legs as u64 - 1).1;
            }
        }

        let (from, to) = self.leg_endpoints(leg);
        let local = ((elapsed - leg as f64 * self.leg_ms()) / self.leg_ms()).clamp(0.0, 1.0) as f32;
        let eased = self.leg.easing.apply(local);
        from + (to - from) * eased
    }
}
