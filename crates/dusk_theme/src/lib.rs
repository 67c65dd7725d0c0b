//! Dusk Theme System
//!
//! Design tokens and presets for the theme toggle screen.
//!
//! # Overview
//!
//! - **Palette**: the four named colors the screen uses
//! - **Color bindings**: endpoint pairs sampled by the theme phase
//! - **Motion tokens**: per-state targets, leg duration and easing
//! - **Variants**: the three shipped flavors of the screen as presets
//! - **Config**: `dusk.toml` overrides for all of the above
//!
//! # Quick Start
//!
//! ```rust
//! use dusk_theme::{ToggleTheme, ToggleVariant};
//!
//! let theme = ToggleTheme::for_variant(ToggleVariant::Classic);
//! let colors = theme.bindings().resolve(0.0);
//! assert_eq!(colors.background, theme.palette().dark);
//! ```

pub mod config;
pub mod presets;
pub mod theme;
pub mod tokens;

pub use config::{ThemeConfig, ThemeConfigError};
pub use presets::{ToggleVariant, VariantParseError};
pub use theme::ToggleTheme;
pub use tokens::*;
