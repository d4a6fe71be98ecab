use std::io;
use thiserror::Error;

/// Errors raised while loading or validating configuration.
///
/// The per-tick simulation path never produces these; degenerate numbers
/// there are replaced with safe defaults instead.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Fails with a `ValidationError` unless `value` is finite and strictly positive.
pub(crate) fn require_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{} must be finite and positive, got {}",
            name, value
        )))
    }
}

/// Fails with a `ValidationError` unless `value` is finite and not negative.
pub(crate) fn require_non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{} must be finite and non-negative, got {}",
            name, value
        )))
    }
}
