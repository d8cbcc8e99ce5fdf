//! Generator configuration
//!
//! Configuration is plain serde data so it can be loaded from a TOML file:
//!
//! ```toml
//! size = 9
//! step_by_step = false
//!
//! [shape]
//! min = 1
//! max = 2
//!
//! [rejigger]
//! enabled = false
//! blank_threshold = 10
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::GeneratorError;

/// Settings for a [`Generator`](crate::Generator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Side length of the square grid. Must be at least 1.
    pub size: u32,
    /// When `true`, construction only seeds the centre and the caller drives
    /// [`Generator::step`](crate::Generator::step) itself.
    pub step_by_step: bool,
    /// Range the visual shape selector is drawn from.
    pub shape: ShapeRange,
    /// Optional blank-region reduction pass run after batch generation.
    pub rejigger: RejiggerConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: 9,
            step_by_step: false,
            shape: ShapeRange::default(),
            rejigger: RejiggerConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Batch-mode config for a grid of the given size.
    pub fn with_size(size: u32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, GeneratorError> {
        let config: GeneratorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, GeneratorError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check that the config describes a buildable generator.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.size == 0 {
            return Err(GeneratorError::InvalidConfig(
                "grid size must be at least 1".to_string(),
            ));
        }
        if self.shape.min > self.shape.max {
            return Err(GeneratorError::InvalidConfig(format!(
                "shape range is empty: min {} > max {}",
                self.shape.min, self.shape.max
            )));
        }
        Ok(())
    }
}

/// Inclusive range of shape values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeRange {
    pub min: u8,
    pub max: u8,
}

impl Default for ShapeRange {
    fn default() -> Self {
        Self { min: 1, max: 2 }
    }
}

/// Settings for the blank-region reduction pass.
///
/// Each pass turns one blank tile bordering the network into a simple passage
/// and runs a few more placement steps from it. Off by default; the pass
/// makes no connectivity guarantee of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RejiggerConfig {
    pub enabled: bool,
    /// Passes keep running while at least this many blank tiles remain.
    pub blank_threshold: usize,
    /// Placement steps run after each forced passage.
    pub steps_per_pass: u32,
    /// Upper bound on the number of passes.
    pub max_passes: u32,
}

impl Default for RejiggerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            blank_threshold: 10,
            steps_per_pass: 10,
            max_passes: 50,
        }
    }
}
