//! Theme configuration (`dusk.toml`)
//!
//! ```toml
//! variant = "classic"
//! duration_ms = 600
//! easing = "ease"
//! pulse_peak = 1.3
//!
//! [palette]
//! dark = "#1e1e24"
//! light = "#f4f4f8"
//! ```
//!
//! Every key is optional; missing keys fall back to the variant defaults.

use crate::presets::{ToggleVariant, VariantParseError};
use crate::theme::ToggleTheme;
use crate::tokens::{ColorToken, Palette};
use dusk_animation::{Easing, EasingParseError};
use dusk_core::{Color, ColorParseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or resolving a theme config
#[derive(Debug, Error)]
pub enum ThemeConfigError {
    #[error("invalid theme config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Variant(#[from] VariantParseError),
    #[error(transparent)]
    Easing(#[from] EasingParseError),
    #[error("palette color '{token}': {source}")]
    Color {
        token: &'static str,
        #[source]
        source: ColorParseError,
    },
    #[error("duration_ms must be greater than zero")]
    ZeroDuration,
    #[error("pulse_peak must be a finite number, got {0}")]
    InvalidPulsePeak(f32),
}

/// Raw theme configuration as written in `dusk.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(default)]
    pub variant: Option<String>,
    #[serde(default)]
    pub duration_ms: Option<u32>,
    #[serde(default)]
    pub easing: Option<String>,
    #[serde(default)]
    pub pulse_peak: Option<f32>,
    #[serde(default)]
    pub palette: PaletteConfig,
}

/// Palette overrides as `#RRGGBB` strings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteConfig {
    #[serde(default)]
    pub dark: Option<String>,
    #[serde(default)]
    pub light: Option<String>,
    #[serde(default)]
    pub gold: Option<String>,
    #[serde(default)]
    pub yellow: Option<String>,
}

impl PaletteConfig {
    fn get(&self, token: ColorToken) -> Option<&str> {
        match token {
            ColorToken::Dark => self.dark.as_deref(),
            ColorToken::Light => self.light.as_deref(),
            ColorToken::Gold => self.gold.as_deref(),
            ColorToken::Yellow => self.yellow.as_deref(),
        }
    }
}

impl ThemeConfig {
    /// Parse from TOML text
    pub fn from_toml(input: &str) -> Result<Self, ThemeConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// The configured variant, or the default one
    pub fn variant(&self) -> Result<ToggleVariant, ThemeConfigError> {
        match &self.variant {
            Some(id) => Ok(id.parse()?),
            None => Ok(ToggleVariant::default()),
        }
    }

    /// Apply every override on top of the variant defaults
    pub fn resolve(&self) -> Result<ToggleTheme, ThemeConfigError> {
        let variant = self.variant()?;
        let mut motion = variant.motion();

        if let Some(duration_ms) = self.duration_ms {
            if duration_ms == 0 {
                return Err(ThemeConfigError::ZeroDuration);
            }
            motion.timing = motion.timing.with_duration(duration_ms);
        }
        if let Some(name) = &self.easing {
            let easing: Easing = name.parse()?;
            motion.timing = motion.timing.with_easing(easing);
        }
        if let Some(peak) = self.pulse_peak {
            if !peak.is_finite() {
                return Err(ThemeConfigError::InvalidPulsePeak(peak));
            }
            motion = motion.with_pulse_peak(peak);
        }

        let mut palette = Palette::default();
        for token in ColorToken::all() {
            if let Some(hex) = self.palette.get(*token) {
                let color = Color::from_hex_str(hex).map_err(|source| ThemeConfigError::Color {
                    token: token.name(),
                    source,
                })?;
                palette.set(*token, color);
            }
        }

        tracing::debug!(
            variant = variant.id(),
            duration_ms = motion.timing.duration_ms,
            easing = %motion.timing.easing,
            "resolved theme config"
        );

        Ok(ToggleTheme::new(palette, motion))
    }
}
