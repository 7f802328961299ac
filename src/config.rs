//! Viewer configuration persistence
//!
//! Stores defaults in `~/.config/lightbox/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::image::{ScaleLimits, ELASTIC_BUFFER, MAX_SCALE, MIN_SCALE};

/// Viewer configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Position opened by an index-less imperative show
    #[serde(default)]
    pub default_start_index: usize,
    /// Nominal minimum zoom
    #[serde(default = "default_min_scale")]
    pub min_scale: f64,
    /// Nominal maximum zoom
    #[serde(default = "default_max_scale")]
    pub max_scale: f64,
    /// Overshoot allowed while a gesture is in progress
    #[serde(default = "default_elastic_buffer")]
    pub elastic_buffer: f64,
}

fn default_min_scale() -> f64 {
    MIN_SCALE
}

fn default_max_scale() -> f64 {
    MAX_SCALE
}

fn default_elastic_buffer() -> f64 {
    ELASTIC_BUFFER
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            default_start_index: 0,
            min_scale: default_min_scale(),
            max_scale: default_max_scale(),
            elastic_buffer: default_elastic_buffer(),
        }
    }
}

/// Errors from reading or writing a config file
#[derive(Debug)]
pub enum ConfigError {
    NoConfigDir,
    IoError(String),
    ParseError(String),
    InvalidScaleRange { min: f64, max: f64 },
    InvalidElasticBuffer(f64),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "No config directory available"),
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::InvalidScaleRange { min, max } => {
                write!(f, "Invalid scale range: min {} max {}", min, max)
            }
            ConfigError::InvalidElasticBuffer(buffer) => {
                write!(f, "Invalid elastic buffer: {} (expected 0 <= buffer < 1)", buffer)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ViewerConfig {
    /// Load config from disk, or return defaults if not found or invalid
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse and validate config from a YAML string
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: ViewerConfig =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject ranges the scale engine is not defined for
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_scale > 0.0 && self.min_scale <= self.max_scale) {
            return Err(ConfigError::InvalidScaleRange {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        if !(0.0..1.0).contains(&self.elastic_buffer) {
            return Err(ConfigError::InvalidElasticBuffer(self.elastic_buffer));
        }
        debug_assert!(self.scale_limits().is_well_formed());
        Ok(())
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content =
            serde_yaml::to_string(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| {
            ConfigError::IoError(format!("Failed to write config to {}: {}", path.display(), e))
        })?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn scale_limits(&self) -> ScaleLimits {
        ScaleLimits::new(self.min_scale, self.max_scale).with_elastic_buffer(self.elastic_buffer)
    }
}
