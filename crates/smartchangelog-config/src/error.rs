//! Configuration error types.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    NotFound(std::path::PathBuf),

    /// Invalid TOML syntax.
    #[error("invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// Configuration cannot be serialized.
    #[error("cannot serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_not_found_display() {
        let err = ConfigError::NotFound(PathBuf::from("/path/to/smartchangelog.toml"));
        assert_eq!(
            err.to_string(),
            "configuration file not found: /path/to/smartchangelog.toml"
        );
    }

    #[test]
    fn test_invalid_display() {
        let err = ConfigError::Invalid("message.first_line_max_length must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: message.first_line_max_length must be > 0"
        );
    }

    #[test]
    fn test_invalid_toml_from() {
        let toml_err = toml::from_str::<toml::Table>("[[[").unwrap_err();
        let err = ConfigError::from(toml_err);
        assert!(err.to_string().starts_with("invalid TOML: "));
    }
}
