use hrtrack_anim::{AnimError, BindingError};
use hrtrack_config::ConfigError;
use hrtrack_grid::GridError;

/// Anything that stops the application before or during playback.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("could not determine OS configuration directory")]
    NoConfigDir,

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Grid(#[from] GridError),

    #[error("animation error: {0}")]
    Anim(#[from] AnimError),

    #[error("invalid key binding: {0}")]
    Binding(#[from] BindingError),

    #[error("failed to start input thread: {0}")]
    InputThread(#[source] std::io::Error),
}
