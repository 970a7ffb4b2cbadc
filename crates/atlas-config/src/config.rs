//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the config inside the config directory.
pub const CONFIG_FILE: &str = "atlas.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// World creation and streaming.
    pub world: WorldConfig,
    /// The command-line tour.
    pub walk: WalkConfig,
    /// Save file handling.
    pub save: SaveConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// World creation and streaming settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Fixed world seed. A random seed is drawn when absent.
    pub seed: Option<f64>,
    /// Generate chunk grids on a worker pool.
    pub parallel_chunks: bool,
    /// Worker threads for parallel generation (0 = one per spare core).
    pub worker_threads: usize,
}

/// Parameters of the straight-line walk the driver performs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WalkConfig {
    /// Number of moves.
    pub steps: u32,
    /// Distance covered per move, in world units.
    pub step_length: f64,
    /// Direction of travel, degrees counter-clockwise from +x.
    pub heading_degrees: f64,
}

/// Save file settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SaveConfig {
    /// Where the world is written.
    pub path: PathBuf,
    /// Save after every move that grew the world.
    pub autosave: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            steps: 20,
            step_length: 250.0,
            heading_degrees: 0.0,
        }
    }
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("world.ron"),
            autosave: true,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Platform config directory for Atlas, falling back to `./atlas`.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("atlas"))
        .unwrap_or_else(|| PathBuf::from("atlas"))
}

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as [`CONFIG_FILE`].
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Re-read the file: `Some(new_config)` if it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("step_length: 250.0"));
        assert!(ron_str.contains("autosave: true"));
        assert!(ron_str.contains("seed: None"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.world.seed = Some(42.5);
        config.world.parallel_chunks = true;
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let config: Config = ron::from_str("(world: (seed: Some(7.0)))").unwrap();
        assert_eq!(config.world.seed, Some(7.0));
        assert_eq!(config.walk, WalkConfig::default());
        assert_eq!(config.save, SaveConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.walk.steps = 3;
        config.save.path = PathBuf::from("/tmp/elsewhere.ron");

        config.save(dir.path()).unwrap();
        assert!(dir.path().join(CONFIG_FILE).exists());
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("fresh");
        let config = Config::load_or_create(&nested).unwrap();
        assert_eq!(config, Config::default());
        assert!(nested.join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.walk.heading_degrees = 90.0;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.map(|c| c.walk.heading_degrees), Some(90.0));
        assert!(modified.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{{not valid}}").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_default_config_dir_named_atlas() {
        assert!(default_config_dir().ends_with("atlas"));
    }
}
