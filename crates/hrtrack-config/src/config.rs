//! Configuration structs with sensible defaults and RON persistence.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const APP_NAME: &str = "hrtrack";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Which star to animate.
    pub star: StarConfig,
    /// Animation timing.
    pub animation: AnimationConfig,
    /// Display scaling.
    pub display: DisplayConfig,
    /// Input settings.
    pub input: InputConfig,
    /// Data source locations.
    pub data: DataConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Requested star parameters. Snapped onto the model grid at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarConfig {
    /// Initial mass in solar masses, nominally in [0.1, 300].
    pub mass: f64,
    /// Metallicity [Fe/H] in dex, nominally in [-4, 0.5].
    pub metallicity: f64,
}

/// Animation timing configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Nominal interval between frames in milliseconds.
    pub interval_ms: u64,
    /// Stop after this many frames (0 = play the track once).
    pub frame_limit: u64,
    /// Wrap around to the first sample after the last one.
    pub repeat: bool,
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Solar-system scale as given on the command line. Larger values show
    /// more of the system; the internal factor is `3 / ss_scale`.
    pub ss_scale: f64,
}

/// Input configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Keybinding overrides (key name -> command name).
    pub keybindings: HashMap<String, String>,
}

/// Locations of the read-only data sources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding `grid.ron`, `colors.ron` and `catalog.ron`.
    pub data_dir: PathBuf,
    /// Calibration type selected from the color table.
    pub color_calibration: String,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Also write JSON logs to the platform log directory.
    pub file_logging: bool,
}

// --- Default implementations ---

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            metallicity: 0.0,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            interval_ms: 100,
            frame_limit: 0,
            repeat: false,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { ss_scale: 1.0 }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            color_calibration: "2deg".to_string(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            file_logging: false,
        }
    }
}

impl DisplayConfig {
    /// Internal solar-system scale factor derived from `ss_scale`.
    pub fn solar_system_scale(&self) -> f64 {
        3.0 / self.ss_scale
    }
}

/// File name of the persisted config inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Platform configuration directory for the application, if the OS exposes one.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME))
}

impl Config {
    /// Path of the config file inside `config_dir`.
    pub fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE_NAME)
    }

    /// Read `config.ron` from `config_dir`. A missing file is replaced by a
    /// freshly written default config.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::path_in(config_dir);
        if !path.exists() {
            let config = Self::default();
            config.save(config_dir)?;
            log::info!("Wrote default config to {}", path.display());
            return Ok(config);
        }
        let config = Self::read_from(&path)?;
        log::info!("Using config {}", path.display());
        Ok(config)
    }

    /// Write `config.ron` into `config_dir`, creating the directory first.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;
        std::fs::write(Self::path_in(config_dir), self.to_ron_string()?)
            .map_err(ConfigError::WriteError)
    }

    /// Pretty RON with one section per block.
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new().depth_limit(2);
        ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)
    }

    fn read_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&text).map_err(ConfigError::ParseError)
    }

    /// Reject settings the animation cannot run with.
    ///
    /// Grid bounds for mass and metallicity are checked later against the
    /// loaded model grid, which knows the real limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.display.ss_scale.is_finite() && self.display.ss_scale > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "display.ss_scale",
                reason: format!("must be a positive number, got {}", self.display.ss_scale),
            });
        }
        if self.animation.interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "animation.interval_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        for (field, value) in [
            ("star.mass", self.star.mass),
            ("star.metallicity", self.star.metallicity),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be finite, got {value}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_describe_a_solar_twin() {
        let config = Config::default();
        assert_eq!(config.star.mass, 1.0);
        assert_eq!(config.star.metallicity, 0.0);
        assert_eq!(config.animation.interval_ms, 100);
        assert!(!config.animation.repeat);
        assert!(config.input.keybindings.is_empty());
    }

    #[test]
    fn test_ron_text_round_trips() {
        let mut config = Config::default();
        config
            .input
            .keybindings
            .insert("+".to_string(), "scale_up".to_string());
        let text = config.to_ron_string().unwrap();
        assert!(text.contains("interval_ms: 100"));
        assert!(text.contains("color_calibration: \"2deg\""));
        let parsed: Config = ron::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config: Config = ron::from_str("(star: (mass: 2.0), animation: ())").unwrap();
        assert_eq!(config.star.mass, 2.0);
        assert_eq!(config.star.metallicity, 0.0);
        assert_eq!(config.animation, AnimationConfig::default());
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_unknown_keys_are_tolerated() {
        let config: Config = ron::from_str("(star: (mass: 3.0), renderer: \"gpu\")").unwrap();
        assert_eq!(config.star.mass, 3.0);
    }

    #[test]
    fn test_solar_system_scale_is_inverse() {
        let mut display = DisplayConfig::default();
        assert!((display.solar_system_scale() - 3.0).abs() < 1e-12);
        display.ss_scale = 3.0;
        assert!((display.solar_system_scale() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_non_positive_scale() {
        let mut config = Config::default();
        config.display.ss_scale = 0.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "display.ss_scale",
                ..
            }
        ));

        config.display.ss_scale = -2.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan_mass_and_zero_interval() {
        let mut config = Config::default();
        config.star.mass = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.animation.interval_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "animation.interval_ms",
                ..
            })
        ));
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_saved_star_is_loaded_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.star.mass = 2.5;
        config.star.metallicity = -0.5;
        config.data.data_dir = PathBuf::from("/srv/mist");
        config.save(dir.path()).unwrap();

        assert_eq!(Config::load_or_create(dir.path()).unwrap(), config);
    }

    #[test]
    fn test_first_run_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("hrtrack");
        let config = Config::load_or_create(&nested).unwrap();
        assert_eq!(config, Config::default());
        assert!(Config::path_in(&nested).exists());
    }

    #[test]
    fn test_corrupt_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(Config::path_in(dir.path()), "(star: (mass: ").unwrap();
        assert!(matches!(
            Config::load_or_create(dir.path()),
            Err(ConfigError::ParseError(_))
        ));
    }
}
