//! Where HR-Track keeps its config and logs.

use std::path::{Path, PathBuf};

use hrtrack_config::{Config, ConfigError};
use tracing::{info, warn};

use crate::error::AppError;

const APP_NAME: &str = "hrtrack";

/// OS-specific directories for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDirs {
    /// Holds `config.ron`.
    pub config_dir: PathBuf,
    /// Holds the JSON session log.
    pub log_dir: PathBuf,
}

impl PlatformDirs {
    /// Resolve platform directories, with `config_override` replacing the
    /// config directory when given. Nothing is created on disk.
    pub fn resolve(config_override: Option<&Path>) -> Result<Self, AppError> {
        let config_dir = match config_override {
            Some(dir) => dir.to_path_buf(),
            None => hrtrack_config::default_config_dir().ok_or(AppError::NoConfigDir)?,
        };
        let log_dir = dirs::data_local_dir()
            .map(|base| base.join(APP_NAME).join("logs"))
            .unwrap_or_else(|| config_dir.join("logs"));
        Ok(Self {
            config_dir,
            log_dir,
        })
    }

    /// Load `config.ron`, falling back to defaults when it cannot be read.
    ///
    /// Runs before logging exists, so the outcome is returned for
    /// [`ConfigOrigin::report`] to log afterwards.
    pub fn load_config(&self) -> (Config, ConfigOrigin) {
        let path = Config::path_in(&self.config_dir);
        let existed = path.exists();
        match Config::load_or_create(&self.config_dir) {
            Ok(config) if existed => (config, ConfigOrigin::Loaded(path)),
            Ok(config) => (config, ConfigOrigin::Created(path)),
            Err(error) => (Config::default(), ConfigOrigin::Defaults { path, error }),
        }
    }
}

/// How the startup config was obtained.
#[derive(Debug)]
pub enum ConfigOrigin {
    Loaded(PathBuf),
    Created(PathBuf),
    /// The file existed but was unusable; defaults are in effect.
    Defaults { path: PathBuf, error: ConfigError },
}

impl ConfigOrigin {
    pub fn path(&self) -> &Path {
        match self {
            Self::Loaded(path) | Self::Created(path) | Self::Defaults { path, .. } => path,
        }
    }

    pub fn report(&self) {
        match self {
            Self::Loaded(path) => info!(path = %path.display(), "Using config"),
            Self::Created(path) => info!(path = %path.display(), "Wrote default config"),
            Self::Defaults { path, error } => {
                warn!(path = %path.display(), "Failed to load config, using defaults: {error}")
            }
        }
    }
}
