//! Dusk configuration file handling

use anyhow::{Context, Result};
use dusk_app::headless_runtime::HeadlessRunConfig;
use dusk_theme::ThemeConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level Dusk configuration (dusk.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DuskConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub headless: HeadlessConfig,
}

/// Headless runner defaults
#[derive(Debug, Deserialize, Serialize)]
pub struct HeadlessConfig {
    /// Logical milliseconds per frame
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Record a frame sample every N frames
    #[serde(default = "default_probe_every")]
    pub probe_every_frames: u32,
    /// Embed frame samples in reports
    #[serde(default)]
    pub record_samples: bool,
}

fn default_tick_ms() -> u64 {
    16
}

fn default_probe_every() -> u32 {
    4
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            probe_every_frames: default_probe_every(),
            record_samples: false,
        }
    }
}

impl HeadlessConfig {
    pub fn run_config(&self) -> HeadlessRunConfig {
        HeadlessRunConfig {
            tick_ms: self.tick_ms,
            probe_every_frames: self.probe_every_frames,
            record_samples: self.record_samples,
            ..Default::default()
        }
    }
}

impl DuskConfig {
    /// Load configuration from a file or a directory containing dusk.toml
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join("dusk.toml")
        } else {
            path.to_path_buf()
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Load `dusk.toml` from the working directory when present
    pub fn load_default() -> Result<Self> {
        let path = Path::new("dusk.toml");
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DuskConfig::from_toml("").unwrap();
        assert_eq!(config.theme, ThemeConfig::default());
        assert_eq!(config.headless.tick_ms, 16);
        assert_eq!(config.headless.probe_every_frames, 4);
        assert!(!config.headless.record_samples);
    }

    #[test]
    fn test_parses_sections() {
        let config = DuskConfig::from_toml(
            r##"
            [theme]
            variant = "spin"
            duration_ms = 450

            [theme.palette]
            dark = "#000000"

            [headless]
            tick_ms = 8
            record_samples = true
            "##,
        )
        .unwrap();

        assert_eq!(config.theme.variant.as_deref(), Some("spin"));
        assert_eq!(config.theme.duration_ms, Some(450));
        assert_eq!(config.theme.palette.dark.as_deref(), Some("#000000"));

        let run = config.headless.run_config();
        assert_eq!(run.tick_ms, 8);
        assert!(run.record_samples);
    }

    #[test]
    fn test_rejects_unknown_theme_keys() {
        assert!(DuskConfig::from_toml("[theme]\nhue = 3").is_err());
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = DuskConfig::from_toml("[theme]\nvariant = \"collapse\"").unwrap();
        let text = config.to_toml().unwrap();
        let again = DuskConfig::from_toml(&text).unwrap();
        assert_eq!(again.theme, config.theme);
    }
}
