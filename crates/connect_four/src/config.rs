//! Board configuration, loadable from TOML.

use super::types::dimensions_fit;
use super::{ConfigError, DEFAULT_HEIGHT, DEFAULT_WIDTH, GameError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Board dimensions for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of rows.
    height: usize,
    /// Number of columns.
    width: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

impl GameConfig {
    /// Creates a configuration, validating the dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Configuration`] unless both dimensions are at least 4.
    #[instrument]
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        let config = Self { height, width };
        config.validate()?;
        Ok(config)
    }

    /// Checks that a line of four fits in both directions and that the
    /// cell count does not overflow.
    pub fn validate(&self) -> Result<(), GameError> {
        if !dimensions_fit(self.height, self.width) {
            return Err(GameError::Configuration {
                height: self.height,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Returns a copy with the given dimensions overridden.
    ///
    /// The result is not validated.
    pub fn with_overrides(self, height: Option<usize>, width: Option<usize>) -> Self {
        Self {
            height: height.unwrap_or(self.height),
            width: width.unwrap_or(self.width),
        }
    }

    /// Parses and validates a TOML document. Missing keys take defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(height = config.height, width = config.width, "Config loaded successfully");
        Ok(config)
    }
}
