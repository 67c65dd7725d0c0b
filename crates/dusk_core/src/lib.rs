//! Dusk Core
//!
//! Visual primitives shared by every Dusk crate:
//!
//! - **Color**: linear RGBA with hex parsing/formatting and exact-endpoint lerp
//! - **Geometry**: points and corner radii
//! - **Transforms**: 2D affine matrices for scale and rotation
//!
//! # Example
//!
//! ```rust
//! use dusk_core::Color;
//!
//! let dark = Color::from_hex(0x1C1C1E);
//! let light = Color::from_hex(0xF2F2F7);
//!
//! assert_eq!(Color::lerp(&dark, &light, 0.0), dark);
//! assert_eq!(Color::lerp(&dark, &light, 1.0), light);
//! ```

pub mod layer;

pub use layer::{Affine2D, Color, ColorParseError, CornerRadius, Point};
