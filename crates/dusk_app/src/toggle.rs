//! Theme toggle animator
//!
//! Holds the switch state and the four animated scalars behind the screen:
//!
//! | Scalar        | Drives                                   |
//! |---------------|------------------------------------------|
//! | `color_phase` | background, panel fill and icon fill     |
//! | `scale`       | panel scale (pulses while active)        |
//! | `progress`    | panel rotation and corner radius         |
//! | `opacity`     | panel opacity                            |
//!
//! Flipping the switch issues a fresh transition to every scalar. Each
//! transition starts from the value on screen at that instant and replaces
//! whatever was running before, including the endless pulse.

use crate::error::{DuskError, Result};
use crate::render::{IconProps, RenderFrame, SquareProps};
use dusk_animation::{AnimationScheduler, Iterations, ScalarId, TransitionTarget};
use dusk_theme::{ThemeConfig, ToggleTheme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four animated scalars
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimatedProperty {
    Scale,
    Progress,
    Opacity,
    ColorPhase,
}

impl AnimatedProperty {
    pub fn all() -> &'static [AnimatedProperty] {
        const ALL: [AnimatedProperty; 4] = [
            AnimatedProperty::Scale,
            AnimatedProperty::Progress,
            AnimatedProperty::Opacity,
            AnimatedProperty::ColorPhase,
        ];
        &ALL
    }

    pub fn name(self) -> &'static str {
        match self {
            AnimatedProperty::Scale => "scale",
            AnimatedProperty::Progress => "progress",
            AnimatedProperty::Opacity => "opacity",
            AnimatedProperty::ColorPhase => "color_phase",
        }
    }
}

impl fmt::Display for AnimatedProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimatedProperty {
    type Err = DuskError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| DuskError::UnknownProperty(s.to_string()))
    }
}

/// Snapshot of the switch state and every scalar's target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToggleTargets {
    pub is_active: bool,
    pub scale: TransitionTarget,
    pub progress: TransitionTarget,
    pub opacity: TransitionTarget,
    pub color_phase: TransitionTarget,
}

/// Drives the theme toggle screen
pub struct ThemeToggleAnimator {
    is_active: bool,
    toggles: u64,
    theme: ToggleTheme,
    scheduler: AnimationScheduler,
    scale: ScalarId,
    progress: ScalarId,
    opacity: ScalarId,
    color_phase: ScalarId,
}

impl ThemeToggleAnimator {
    /// Build the animator in the inactive state
    pub fn new(theme: ToggleTheme) -> Self {
        let motion = theme.motion().clone();
        let mut scheduler = AnimationScheduler::new();

        let scale = scheduler.add_scalar(motion.scale.rest);
        let progress = scheduler.add_scalar(motion.progress.rest);
        let opacity = scheduler.add_scalar(motion.opacity.rest);
        let color_phase = scheduler.add_scalar(motion.color_phase.rest);

        // The phase is derived from the switch state, so it carries a timing
        // toward the inactive endpoint from the first frame.
        scheduler.animate_to(color_phase, motion.color_phase.rest, motion.timing);

        Self {
            is_active: false,
            toggles: 0,
            theme,
            scheduler,
            scale,
            progress,
            opacity,
            color_phase,
        }
    }

    /// Build from a parsed `dusk.toml`
    pub fn from_config(config: &ThemeConfig) -> Result<Self> {
        Ok(Self::new(config.resolve()?))
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Number of toggles since construction
    pub fn toggle_count(&self) -> u64 {
        self.toggles
    }

    pub fn theme(&self) -> &ToggleTheme {
        &self.theme
    }

    pub fn now_ms(&self) -> f64 {
        self.scheduler.now_ms()
    }

    /// Flip the switch and retarget every scalar. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.is_active = !self.is_active;
        self.toggles += 1;

        let motion = self.theme.motion().clone();
        let active = self.is_active;

        self.scheduler.animate_to(
            self.color_phase,
            motion.color_phase.for_state(active),
            motion.timing,
        );
        if active {
            self.scheduler.oscillate(
                self.scale,
                motion.scale.active,
                motion.pulse_peak,
                motion.timing,
                Iterations::Infinite,
            );
        } else {
            self.scheduler
                .animate_to(self.scale, motion.scale.rest, motion.timing);
        }
        self.scheduler.animate_to(
            self.progress,
            motion.progress.for_state(active),
            motion.timing,
        );
        self.scheduler.animate_to(
            self.opacity,
            motion.opacity.for_state(active),
            motion.timing,
        );

        tracing::debug!(
            is_active = active,
            toggles = self.toggles,
            now_ms = self.scheduler.now_ms(),
            "theme toggled"
        );

        active
    }

    /// Advance every scalar by `dt_ms`
    pub fn tick(&mut self, dt_ms: f64) {
        self.scheduler.tick(dt_ms);
    }

    /// Advance every scalar by the wall-clock time since the previous tick
    pub fn tick_wall(&mut self) {
        self.scheduler.tick_wall();
    }

    /// True while any scalar is still moving (always true while pulsing)
    pub fn is_animating(&self) -> bool {
        self.scheduler.has_active_animations()
    }

    fn id(&self, property: AnimatedProperty) -> ScalarId {
        match property {
            AnimatedProperty::Scale => self.scale,
            AnimatedProperty::Progress => self.progress,
            AnimatedProperty::Opacity => self.opacity,
            AnimatedProperty::ColorPhase => self.color_phase,
        }
    }

    /// Current value of a scalar
    pub fn value(&self, property: AnimatedProperty) -> f32 {
        self.scheduler
            .value(self.id(property))
            .unwrap_or_default()
    }

    /// Target of a scalar's most recent transition
    pub fn target(&self, property: AnimatedProperty) -> TransitionTarget {
        self.scheduler
            .target(self.id(property))
            .unwrap_or(TransitionTarget::Value(0.0))
    }

    pub fn targets(&self) -> ToggleTargets {
        ToggleTargets {
            is_active: self.is_active,
            scale: self.target(AnimatedProperty::Scale),
            progress: self.target(AnimatedProperty::Progress),
            opacity: self.target(AnimatedProperty::Opacity),
            color_phase: self.target(AnimatedProperty::ColorPhase),
        }
    }

    /// Derive the visual properties for the current frame
    pub fn frame(&self) -> RenderFrame {
        let phase = self.value(AnimatedProperty::ColorPhase);
        let colors = self.theme.bindings().resolve(phase);

        RenderFrame {
            time_ms: self.scheduler.now_ms(),
            is_active: self.is_active,
            background: colors.background,
            square: SquareProps::from_scalars(
                colors.square,
                self.value(AnimatedProperty::Scale),
                self.value(AnimatedProperty::Progress),
                self.value(AnimatedProperty::Opacity),
            ),
            icon: IconProps::with_fill(colors.icon),
        }
    }
}

impl Default for ThemeToggleAnimator {
    fn default() -> Self {
        Self::new(ToggleTheme::default())
    }
}
