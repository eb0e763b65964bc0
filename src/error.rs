use thiserror::Error;

/// Failure to build a source model from its parameter string.
///
/// Raised at construction time only; a source that was built successfully
/// never reports a `ConfigError` while sampling.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("source parameters pointer is null")]
    NullParameters,

    #[error("source parameters are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("malformed source parameters: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid source parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("source model rejected parameters: {0}")]
    Model(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ConfigError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
