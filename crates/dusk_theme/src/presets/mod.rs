//! Built-in screen variants.
//!
//! The screen ships in three flavors that agree on colors and timing but
//! disagree on where the panel settles when the switch is turned off.

use crate::tokens::*;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Built-in variant catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToggleVariant {
    /// Panel rests at full size and 20% opacity; active progress is 0.5.
    #[default]
    Classic,
    /// Panel collapses to nothing when inactive.
    Collapse,
    /// Active progress unwinds all the way to 0 (square corners, no spin).
    Spin,
}

/// Unknown variant id in configuration or on the command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variant '{0}' (expected one of: classic, collapse, spin)")]
pub struct VariantParseError(pub String);

impl ToggleVariant {
    /// Stable variant id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Collapse => "collapse",
            Self::Spin => "spin",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Collapse => "Collapse",
            Self::Spin => "Spin",
        }
    }

    /// Full variant list.
    pub fn all() -> &'static [ToggleVariant] {
        const VARIANTS: [ToggleVariant; 3] = [
            ToggleVariant::Classic,
            ToggleVariant::Collapse,
            ToggleVariant::Spin,
        ];
        &VARIANTS
    }

    /// Motion tokens for this variant.
    pub fn motion(self) -> MotionTokens {
        let classic = MotionTokens::default();
        match self {
            Self::Classic => classic,
            Self::Collapse => MotionTokens {
                scale: StateTargets::new(0.0, 1.0),
                opacity: StateTargets::new(0.0, 1.0),
                ..classic
            },
            Self::Spin => MotionTokens {
                progress: StateTargets::new(1.0, 0.0),
                ..classic
            },
        }
    }
}

impl Display for ToggleVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ToggleVariant {
    type Err = VariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|v| v.id() == needle)
            .ok_or_else(|| VariantParseError(s.to_string()))
    }
}
