//! Color tokens for theming

use dusk_core::Color;

/// Palette color keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    Dark,
    Light,
    Gold,
    Yellow,
}

impl ColorToken {
    pub fn all() -> &'static [ColorToken] {
        const TOKENS: [ColorToken; 4] = [
            ColorToken::Dark,
            ColorToken::Light,
            ColorToken::Gold,
            ColorToken::Yellow,
        ];
        &TOKENS
    }

    /// Key used in configuration files
    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Dark => "dark",
            ColorToken::Light => "light",
            ColorToken::Gold => "gold",
            ColorToken::Yellow => "yellow",
        }
    }
}

/// The named colors of the screen
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub dark: Color,
    pub light: Color,
    pub gold: Color,
    pub yellow: Color,
}

impl Palette {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Dark => self.dark,
            ColorToken::Light => self.light,
            ColorToken::Gold => self.gold,
            ColorToken::Yellow => self.yellow,
        }
    }

    pub fn set(&mut self, token: ColorToken, color: Color) {
        match token {
            ColorToken::Dark => self.dark = color,
            ColorToken::Light => self.light = color,
            ColorToken::Gold => self.gold = color,
            ColorToken::Yellow => self.yellow = color,
        }
    }

    /// Bindings for the background, the panel and the icon
    pub fn bindings(&self) -> ColorBindings {
        ColorBindings {
            background: ColorBinding::new(self.dark, self.light),
            square: ColorBinding::new(self.gold, self.yellow),
            icon: ColorBinding::new(self.yellow, self.dark),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dark: Color::from_hex(0x1E1E24),
            light: Color::from_hex(0xF4F4F8),
            gold: Color::from_hex(0xE5A823),
            yellow: Color::from_hex(0xF9D71C),
        }
    }
}

/// Two endpoint colors sampled by the theme phase
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorBinding {
    /// Color at phase 0 (inactive)
    pub from: Color,
    /// Color at phase 1 (active)
    pub to: Color,
}

impl ColorBinding {
    pub const fn new(from: Color, to: Color) -> Self {
        Self { from, to }
    }

    /// Linear interpolation over `[0, 1]`, exact at both ends
    pub fn at(&self, phase: f32) -> Color {
        Color::lerp(&self.from, &self.to, phase)
    }
}

/// Every phase-driven color on the screen
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorBindings {
    pub background: ColorBinding,
    pub square: ColorBinding,
    pub icon: ColorBinding,
}

/// Colors resolved for a single phase value
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedColors {
    pub background: Color,
    pub square: Color,
    pub icon: Color,
}

impl ColorBindings {
    pub fn resolve(&self, phase: f32) -> ResolvedColors {
        ResolvedColors {
            background: self.background.at(phase),
            square: self.square.at(phase),
            icon: self.icon.at(phase),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings_follow_palette_roles() {
        let palette = Palette::default();
        let bindings = palette.bindings();

        assert_eq!(bindings.background.from, palette.dark);
        assert_eq!(bindings.background.to, palette.light);
        assert_eq!(bindings.square.from, palette.gold);
        assert_eq!(bindings.square.to, palette.yellow);
        assert_eq!(bindings.icon.from, palette.yellow);
        assert_eq!(bindings.icon.to, palette.dark);
    }

    #[test]
    fn test_resolve_endpoints_exact() {
        let palette = Palette::default();
        let bindings = palette.bindings();

        let inactive = bindings.resolve(0.0);
        assert_eq!(inactive.background, palette.dark);
        assert_eq!(inactive.square, palette.gold);
        assert_eq!(inactive.icon, palette.yellow);

        let active = bindings.resolve(1.0);
        assert_eq!(active.background, palette.light);
        assert_eq!(active.square, palette.yellow);
        assert_eq!(active.icon, palette.dark);
    }

    #[test]
    fn test_palette_set_and_get() {
        let mut palette = Palette::default();
        for token in ColorToken::all() {
            palette.set(*token, Color::WHITE);
            assert_eq!(palette.get(*token), Color::WHITE, "{}", token.name());
        }
    }
}
