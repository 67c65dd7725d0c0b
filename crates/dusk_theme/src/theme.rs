//! Theme bundle handed to the toggle animator

use crate::presets::ToggleVariant;
use crate::tokens::{ColorBindings, MotionTokens, Palette};

/// Palette plus motion tokens for one screen
#[derive(Clone, Debug, PartialEq)]
pub struct ToggleTheme {
    palette: Palette,
    motion: MotionTokens,
}

impl ToggleTheme {
    pub fn new(palette: Palette, motion: MotionTokens) -> Self {
        Self { palette, motion }
    }

    /// Default palette with a built-in variant's motion
    pub fn for_variant(variant: ToggleVariant) -> Self {
        Self::new(Palette::default(), variant.motion())
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn motion(&self) -> &MotionTokens {
        &self.motion
    }

    pub fn bindings(&self) -> ColorBindings {
        self.palette.bindings()
    }
}

impl Default for ToggleTheme {
    fn default() -> Self {
        Self::for_variant(ToggleVariant::default())
    }
}
