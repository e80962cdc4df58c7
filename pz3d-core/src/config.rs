//! Scene configuration
//!
//! Everything the hosts need to build a selector and a spin, plus the label
//! and colour settings handed through untouched to the rendering backend.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::selector::PointerZoneSelector;
use crate::spin::Spin;

/// Text label drawn in front of the pyramid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub text: String,
    pub size: f32,
    pub color: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            text: "Paul Architect".to_string(),
            size: 3.0,
            color: "#ff0000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// One overlay resource per zone, left to right
    pub resources: Vec<String>,
    /// Rotation added to the pyramid every frame (radians)
    pub spin_step: [f32; 3],
    pub label: LabelConfig,
    pub pyramid_color: String,
    pub camera_distance: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            resources: (1..=5).map(|i| format!("images/image{i}.png")).collect(),
            spin_step: [0.01, 0.01, 0.0],
            label: LabelConfig::default(),
            pyramid_color: "#00ff00".to_string(),
            camera_distance: 8.0,
        }
    }
}

impl SceneConfig {
    /// Parse a JSON object; missing fields keep their defaults.
    pub fn from_json(input: &str) -> Result<Self, ConfigurationError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String, ConfigurationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.resources.is_empty() {
            return Err(ConfigurationError::NoZones);
        }
        Ok(())
    }

    pub fn selector(&self) -> Result<PointerZoneSelector<String>, ConfigurationError> {
        PointerZoneSelector::from_resources(self.resources.clone())
    }

    pub fn spin(&self) -> Spin {
        let [dx, dy, dz] = self.spin_step;
        Spin::new(dx, dy, dz)
    }
}
