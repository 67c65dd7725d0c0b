//! Per-frame visual properties handed to the host renderer

use crate::error::DuskError;
use dusk_core::{Affine2D, Color, CornerRadius};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::str::FromStr;

/// Edge length of the animated panel
pub const SQUARE_SIZE: f32 = 200.0;

/// Full turns of the panel between progress 0 and progress 1
pub const ROTATION_TURNS: f32 = 2.0;

/// Rendered size of the icon
pub const ICON_SIZE: f32 = 120.0;

/// Icon view box (`min-x min-y width height`)
pub const ICON_VIEW_BOX: [f32; 4] = [0.0, 0.0, 116.0, 116.0];

/// Icon outline, drawn with the even-odd fill rule
pub const ICON_PATH: &str = "M58 14.2641V0H116V57.9995H101.735V14.2641H58Z \
M14.2649 101.736H57.9999V58.0004H14.2649V101.736ZM0 115.364H72.2639V43.0996H0V115.364Z";

/// Vector icon properties
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconProps {
    pub fill: Color,
    pub size: f32,
    pub view_box: [f32; 4],
    pub path: &'static str,
    pub even_odd: bool,
}

impl IconProps {
    pub fn with_fill(fill: Color) -> Self {
        Self {
            fill,
            size: ICON_SIZE,
            view_box: ICON_VIEW_BOX,
            path: ICON_PATH,
            even_odd: true,
        }
    }
}

/// Animated panel properties
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquareProps {
    pub fill: Color,
    pub size: f32,
    pub opacity: f32,
    pub scale: f32,
    pub rotation_rad: f32,
    pub corner_radius: CornerRadius,
    /// Scale and rotation about the panel center
    pub transform: Affine2D,
}

impl SquareProps {
    /// Derive the panel from its scalar inputs
    pub fn from_scalars(fill: Color, scale: f32, progress: f32, opacity: f32) -> Self {
        let rotation_rad = progress * ROTATION_TURNS * 2.0 * PI;
        let transform = Affine2D::scale(scale, scale).then(&Affine2D::rotation(rotation_rad));
        Self {
            fill,
            size: SQUARE_SIZE,
            opacity,
            scale,
            rotation_rad,
            corner_radius: CornerRadius::uniform(progress * SQUARE_SIZE / 2.0),
            transform,
        }
    }
}

/// Phase-driven color on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorElement {
    Background,
    Square,
    Icon,
}

impl ColorElement {
    pub fn all() -> &'static [ColorElement] {
        const ALL: [ColorElement; 3] = [
            ColorElement::Background,
            ColorElement::Square,
            ColorElement::Icon,
        ];
        &ALL
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorElement::Background => "background",
            ColorElement::Square => "square",
            ColorElement::Icon => "icon",
        }
    }
}

impl FromStr for ColorElement {
    type Err = DuskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|e| e.name() == s)
            .ok_or_else(|| DuskError::UnknownElement(s.to_string()))
    }
}

/// Everything the host draws for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderFrame {
    pub time_ms: f64,
    pub is_active: bool,
    pub background: Color,
    pub square: SquareProps,
    pub icon: IconProps,
}

impl RenderFrame {
    pub fn color(&self, element: ColorElement) -> Color {
        match element {
            ColorElement::Background => self.background,
            ColorElement::Square => self.square.fill,
            ColorElement::Icon => self.icon.fill,
        }
    }

    /// Flatten into a serializable sample
    pub fn sample(&self) -> FrameSample {
        FrameSample {
            time_ms: self.time_ms,
            is_active: self.is_active,
            background: self.background.to_hex_string(),
            square_fill: self.square.fill.to_hex_string(),
            icon_fill: self.icon.fill.to_hex_string(),
            opacity: self.square.opacity,
            scale: self.square.scale,
            rotation_rad: self.square.rotation_rad,
            border_radius: self.square.corner_radius.top_left,
        }
    }
}

/// Serializable frame summary used by traces and reports
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameSample {
    pub time_ms: f64,
    pub is_active: bool,
    pub background: String,
    pub square_fill: String,
    pub icon_fill: String,
    pub opacity: f32,
    pub scale: f32,
    pub rotation_rad: f32,
    pub border_radius: f32,
}
