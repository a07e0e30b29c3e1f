//! Configuration system
//!
//! `Config` gives any serde-able settings tree file load/save in TOML or RON,
//! chosen by file extension. `SimConfig` is the tuning tree the simulation
//! reads every tick.

pub use serde::{Deserialize, Serialize};

mod sim;

pub use sim::{
    AsteroidConfig, BulletConfig, DiagnosticsConfig, FragmentationConfig, PipelinePreset,
    ShipConfig, SimConfig, VfxConfig, WorldConfig,
};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        Self::from_str_with_format(&contents, path)
    }

    /// Parse configuration text, picking the format from `path`'s extension
    fn from_str_with_format(contents: &str, path: &str) -> Result<Self, ConfigError> {
        let config: Self = if path.ends_with(".toml") {
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but cannot run
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Load configuration from file, or fall back to defaults when the file
    /// does not exist
    fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        if std::path::Path::new(path).exists() {
            Self::load_from_file(path)
        } else {
            log::info!("Config file {} not found, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

impl Config for SimConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::Invalid("capacity must be at least 1".to_string()));
        }
        let fragmentation = &self.fragmentation;
        // Children spawn on top of each other; without a delay siblings hit at once
        let delay = fragmentation.child_collision_delay;
        if delay.is_nan() || delay <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "fragmentation.child_collision_delay must be positive, got {delay}"
            )));
        }
        let scale = fragmentation.scale;
        if scale.is_nan() || scale <= 0.0 || scale >= 1.0 {
            return Err(ConfigError::Invalid(format!(
                "fragmentation.scale must lie in (0, 1), got {scale}"
            )));
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Parsed but out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
