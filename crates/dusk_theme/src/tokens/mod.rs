//! Design tokens for theming
//!
//! - Colors (palette and phase-driven bindings)
//! - Motion (durations, easing, per-state targets)

mod color;
mod motion;

pub use color::*;
pub use motion::*;
