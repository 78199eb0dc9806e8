//! Errors raised while reading, writing or checking `config.ron`.

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    ReadError(#[source] std::io::Error),

    #[error("cannot write config file: {0}")]
    WriteError(#[source] std::io::Error),

    #[error("config file is not valid RON: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    #[error("cannot encode config as RON: {0}")]
    SerializeError(#[source] ron::Error),

    /// `field` is the dotted path of the rejected setting, e.g.
    /// `display.ss_scale`.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
