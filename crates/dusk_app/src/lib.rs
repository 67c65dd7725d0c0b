//! Dusk Theme Toggle
//!
//! A single screen whose switch flips between a dark and a light theme.
//! Every flip retargets four animated scalars and the host renderer draws
//! whatever [`ThemeToggleAnimator::frame`] returns for the current instant.
//!
//! # Example
//!
//! ```
//! use dusk_app::prelude::*;
//!
//! let mut animator = ThemeToggleAnimator::default();
//! assert!(animator.toggle());
//!
//! // One 60fps frame
//! animator.tick(16.0);
//! let frame = animator.frame();
//! assert!(frame.is_active);
//! ```
//!
//! The `headless_*` modules run scripted JSON scenarios against an animator
//! with a deterministic clock, which is what `dusk run` uses.

mod error;
pub mod headless_assert;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_runtime;
pub mod headless_scenario;
pub mod render;
pub mod toggle;

pub use error::{DuskError, Result};
pub use render::{
    ColorElement, FrameSample, IconProps, RenderFrame, SquareProps, ICON_PATH, ICON_SIZE,
    ICON_VIEW_BOX, ROTATION_TURNS, SQUARE_SIZE,
};
pub use toggle::{AnimatedProperty, ThemeToggleAnimator, ToggleTargets};

// Re-export the theme layer for convenience
pub use dusk_theme::{ThemeConfig, ToggleTheme, ToggleVariant};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::error::{DuskError, Result};
    pub use crate::render::{ColorElement, FrameSample, RenderFrame};
    pub use crate::toggle::{AnimatedProperty, ThemeToggleAnimator, ToggleTargets};

    pub use dusk_animation::{Easing, Iterations, TimingConfig, TransitionTarget};
    pub use dusk_core::Color;
    pub use dusk_theme::{Palette, ThemeConfig, ToggleTheme, ToggleVariant};
}
