use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::pacing::AnimationSpeed;

/// Animation speed bounds, 1 (slowest) to 10 (fastest).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub speed_min: u8,
    pub speed_max: u8,
    pub speed_default: u8,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed_min: 1,
            speed_max: 10,
            speed_default: 5,
        }
    }
}

impl AnimationConfig {
    pub fn clamp_speed(&self, speed: u8) -> u8 {
        speed.clamp(self.speed_min, self.speed_max)
    }

    /// Pacing speed for the configured default.
    pub fn speed(&self) -> AnimationSpeed {
        AnimationSpeed::new(self.clamp_speed(self.speed_default))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayConfig {
    pub size_min: usize,
    pub size_max: usize,
    pub size_default: usize,
    pub value_min: i64,
    pub value_max: i64,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            size_min: 10,
            size_max: 200,
            size_default: 50,
            value_min: 10,
            value_max: 400,
        }
    }
}

impl ArrayConfig {
    pub fn clamp_size(&self, size: usize) -> usize {
        size.clamp(self.size_min, self.size_max)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    /// Fraction of each bar slot left empty between bars.
    pub bar_gap_ratio: f32,
    /// Minimum bar width in pixels.
    pub bar_min_width: f32,
    /// Headroom above the tallest bar.
    pub y_headroom: f64,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            bar_gap_ratio: 0.1,
            bar_min_width: 2.0,
            y_headroom: 1.1,
        }
    }
}

/// Top level settings of the visualizer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub animation: AnimationConfig,
    pub array: ArrayConfig,
    pub visual: VisualConfig,
    pub theme: String,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            animation: AnimationConfig::default(),
            array: ArrayConfig::default(),
            visual: VisualConfig::default(),
            theme: "default".to_string(),
        }
    }
}

impl VisualizerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).wrap_err("invalid visualizer config")?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
