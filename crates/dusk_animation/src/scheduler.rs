//! Animation scheduler
//!
//! Owns every animated scalar and advances them once per frame on a
//! logical millisecond clock. Scalars are independent: a tick samples each
//! one against the same clock reading, in no particular order.

use crate::animated::{AnimatedScalar, TransitionTarget};
use crate::oscillation::Iterations;
use crate::timing::TimingConfig;
use slotmap::{new_key_type, SlotMap};
use std::time::Instant;

new_key_type! {
    pub struct ScalarId;
}

/// The animation scheduler that ticks all active scalars
pub struct AnimationScheduler {
    scalars: SlotMap<ScalarId, AnimatedScalar>,
    now_ms: f64,
    last_frame: Instant,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            scalars: SlotMap::with_key(),
            now_ms: 0.0,
            last_frame: Instant::now(),
        }
    }

    /// Current reading of the logical clock
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn add_scalar(&mut self, initial: f32) -> ScalarId {
        self.scalars.insert(AnimatedScalar::new(initial))
    }

    pub fn remove_scalar(&mut self, id: ScalarId) -> Option<AnimatedScalar> {
        self.scalars.remove(id)
    }

    /// Last sampled value of a scalar
    pub fn value(&self, id: ScalarId) -> Option<f32> {
        self.scalars.get(id).map(AnimatedScalar::value)
    }

    pub fn target(&self, id: ScalarId) -> Option<TransitionTarget> {
        self.scalars.get(id).map(AnimatedScalar::target)
    }

    /// Issue a timing toward `to`, starting now. Returns false for unknown ids.
    pub fn animate_to(&mut self, id: ScalarId, to: f32, config: TimingConfig) -> bool {
        let now = self.now_ms;
        match self.scalars.get_mut(id) {
            Some(scalar) => {
                tracing::trace!(?id, to, duration_ms = config.duration_ms, "animate_to");
                scalar.animate_to(to, config, now);
                true
            }
            None => false,
        }
    }

    /// Issue an oscillation between `base` and `peak`, starting now
    pub fn oscillate(
        &mut self,
        id: ScalarId,
        base: f32,
        peak: f32,
        leg: TimingConfig,
        iterations: Iterations,
    ) -> bool {
        let now = self.now_ms;
        match self.scalars.get_mut(id) {
            Some(scalar) => {
                tracing::trace!(?id, base, peak, ?iterations, "oscillate");
                scalar.oscillate(base, peak, leg, iterations, now);
                true
            }
            None => false,
        }
    }

    pub fn set_immediate(&mut self, id: ScalarId, value: f32) -> bool {
        match self.scalars.get_mut(id) {
            Some(scalar) => {
                scalar.set_immediate(value);
                true
            }
            None => false,
        }
    }

    /// Advance the clock by `dt_ms` and sample every scalar.
    ///
    /// Also restarts the wall-clock reference, so a later [`tick_wall`]
    /// only covers time that no tick has accounted for yet.
    ///
    /// [`tick_wall`]: AnimationScheduler::tick_wall
    pub fn tick(&mut self, dt_ms: f64) {
        self.last_frame = Instant::now();
        self.now_ms += dt_ms.max(0.0);
        let now = self.now_ms;

        for (_, scalar) in self.scalars.iter_mut() {
            scalar.sample(now);
        }

        tracing::trace!(now_ms = now, scalars = self.scalars.len(), "scheduler tick");
    }

    /// Advance by the wall-clock time since the previous tick of either kind
    pub fn tick_wall(&mut self) {
        let dt = self.last_frame.elapsed().as_secs_f64() * 1000.0;
        self.tick(dt);
    }

    /// Check if any scalar is still moving
    pub fn has_active_animations(&self) -> bool {
        let now = self.now_ms;
        self.scalars.iter().any(|(_, s)| s.is_animating(now))
    }

    /// Get the number of scalars in the scheduler
    pub fn scalar_count(&self) -> usize {
        self.scalars.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use std::time::Duration;

    const LEG: TimingConfig = TimingConfig::new(600, Easing::Ease);

    #[test]
    fn test_scalars_advance_independently() {
        let mut scheduler = AnimationScheduler::new();
        let a = scheduler.add_scalar(0.0);
        let b = scheduler.add_scalar(1.0);

        scheduler.animate_to(a, 1.0, LEG);
        scheduler.animate_to(b, 0.0, TimingConfig::new(1_200, Easing::Linear));

        for _ in 0..38 {
            scheduler.tick(16.0);
        }

        // 608ms: a has landed, b is halfway-ish
        assert_eq!(scheduler.value(a), Some(1.0));
        let b_value = scheduler.value(b).unwrap();
        assert!((b_value - (1.0 - 608.0 / 1_200.0)).abs() < 1e-4);
        assert!(scheduler.has_active_animations());
    }

    #[test]
    fn test_settles_after_all_timings_land() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.add_scalar(0.2);
        assert!(!scheduler.has_active_animations());

        scheduler.animate_to(id, 1.0, LEG);
        assert!(scheduler.has_active_animations());

        scheduler.tick(600.0);
        assert!(!scheduler.has_active_animations());
        assert_eq!(scheduler.value(id), Some(1.0));
    }

    #[test]
    fn test_infinite_oscillation_keeps_scheduler_active() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.add_scalar(1.0);
        scheduler.oscillate(id, 1.0, 1.3, LEG, Iterations::Infinite);

        for _ in 0..1_000 {
            scheduler.tick(16.0);
        }
        assert!(scheduler.has_active_animations());
        assert!(scheduler.target(id).unwrap().is_oscillating());
    }

    #[test]
    fn test_unknown_ids_are_rejected() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.add_scalar(0.0);
        scheduler.remove_scalar(id);

        assert!(!scheduler.animate_to(id, 1.0, LEG));
        assert!(!scheduler.set_immediate(id, 1.0));
        assert_eq!(scheduler.value(id), None);
        assert_eq!(scheduler.scalar_count(), 0);
    }

    #[test]
    fn test_tick_wall_follows_real_time() {
        let mut scheduler = AnimationScheduler::new();
        std::thread::sleep(Duration::from_millis(30));
        scheduler.tick_wall();

        let first = scheduler.now_ms();
        assert!(first >= 30.0, "clock advanced only {first}ms");
        assert!(first < 1_000.0, "clock jumped to {first}ms");
    }

    #[test]
    fn test_tick_wall_does_not_recount_logical_ticks() {
        let mut scheduler = AnimationScheduler::new();
        std::thread::sleep(Duration::from_millis(50));
        scheduler.tick(16.0);
        scheduler.tick_wall();

        // The logical tick covers everything before it; only the gap
        // between `tick` and `tick_wall` is added.
        let now = scheduler.now_ms();
        assert!(now >= 16.0, "clock rewound to {now}ms");
        assert!(now < 16.0 + 40.0, "logical tick counted twice: {now}ms");
    }

    #[test]
    fn test_tick_wall_drives_timings_to_completion() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.add_scalar(0.0);
        scheduler.animate_to(id, 1.0, TimingConfig::new(20, Easing::Linear));

        std::thread::sleep(Duration::from_millis(25));
        scheduler.tick_wall();
        assert_eq!(scheduler.value(id), Some(1.0));
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_negative_dt_does_not_rewind() {
        let mut scheduler = AnimationScheduler::new();
        scheduler.tick(100.0);
        scheduler.tick(-50.0);
        assert_eq!(scheduler.now_ms(), 100.0);
    }
}
