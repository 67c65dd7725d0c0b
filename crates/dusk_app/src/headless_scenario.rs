//! Scenario definition for headless toggle runs.

use crate::render::ColorElement;
use crate::toggle::AnimatedProperty;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Sequence of headless steps.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::from_json(&raw)
    }
}

fn default_tolerance() -> f32 {
    1e-3
}

/// Scenario steps: the switch gesture, clock advances, and assertions.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Toggle,
    Wait {
        ms: u64,
    },
    Tick {
        frames: u32,
    },
    AssertActive {
        value: bool,
    },
    AssertTarget {
        scalar: AnimatedProperty,
        value: f32,
    },
    AssertOscillating {
        scalar: AnimatedProperty,
    },
    AssertValue {
        scalar: AnimatedProperty,
        value: f32,
        #[serde(default = "default_tolerance")]
        tolerance: f32,
    },
    AssertColor {
        element: ColorElement,
        hex: String,
    },
    AssertSettled,
}
