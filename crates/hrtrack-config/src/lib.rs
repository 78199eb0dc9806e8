//! HR-Track settings: which star to animate, how fast, at what solar-system
//! scale, and where the data files live.
//!
//! Settings persist as `config.ron` in the platform config directory. Every
//! section uses serde defaults, so older or partial files still load, and
//! command-line flags are layered on top with [`Config::apply_cli_overrides`].

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    AnimationConfig, Config, DataConfig, DebugConfig, DisplayConfig, InputConfig, StarConfig,
    CONFIG_FILE_NAME, default_config_dir,
};
pub use error::ConfigError;
