//! Game configuration
//!
//! The simulation tuning tree plus options for the headless run. Every field
//! has a default, so a config file only needs the values it changes.

use arcade_engine::config::{Config, ConfigError, SimConfig};
use serde::{Deserialize, Serialize};

/// Path tried when none is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "asteroids.toml";

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Simulation tuning
    pub sim: SimConfig,

    /// Number of ticks to run
    pub ticks: u64,

    /// Tick length in tick-equivalent units (1.0 = 1/60 s)
    pub delta_time: f32,

    /// Default log filter, overridable through `RUST_LOG`
    pub log_level: String,

    /// Drive the ship with the scripted autopilot
    pub autopilot: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            ticks: 1800,
            delta_time: 1.0,
            log_level: "info".to_string(),
            autopilot: true,
        }
    }
}

impl Config for GameConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.delta_time.is_nan() || self.delta_time <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "delta_time must be positive, got {}",
                self.delta_time
            )));
        }
        self.sim.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_engine::config::PipelinePreset;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let text = "ticks = 120\n\n[sim]\npipeline = \"classic\"\n\n[sim.asteroid]\ninitial_count = 9\n";
        let config = GameConfig::from_str_with_format(text, "run.toml").unwrap();
        assert_eq!(config.ticks, 120);
        assert_eq!(config.sim.pipeline, PipelinePreset::Classic);
        assert_eq!(config.sim.asteroid.initial_count, 9);
        assert!(config.autopilot);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_sim_section_rejected() {
        let text = "[sim.fragmentation]\nchild_collision_delay = 0.0\n";
        let result = GameConfig::from_str_with_format(text, "run.toml");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_ron_config() {
        let text = "(ticks: 10, autopilot: false)";
        let config = GameConfig::from_str_with_format(text, "run.ron").unwrap();
        assert_eq!(config.ticks, 10);
        assert!(!config.autopilot);
    }
}
