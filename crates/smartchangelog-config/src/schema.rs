//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Commit message rules.
    #[serde(default)]
    pub message: MessageConfig,

    /// Changelog configuration.
    #[serde(default)]
    pub changelog: ChangelogConfig,
}

impl Config {
    /// Checks the values serde cannot check.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a line length limit is zero.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.message.first_line_max_length == 0 {
            return Err(ConfigError::Invalid(
                "message.first_line_max_length must be > 0".to_string(),
            ));
        }
        if self.message.body_line_max_length == 0 {
            return Err(ConfigError::Invalid(
                "message.body_line_max_length must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Serializes the configuration as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Commit message rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageConfig {
    /// Maximum length of the first line, in characters.
    #[serde(default = "default_first_line_max_length")]
    pub first_line_max_length: usize,

    /// Maximum length of every body line, in characters.
    #[serde(default = "default_body_line_max_length")]
    pub body_line_max_length: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            first_line_max_length: default_first_line_max_length(),
            body_line_max_length: default_body_line_max_length(),
        }
    }
}

fn default_first_line_max_length() -> usize {
    70
}

fn default_body_line_max_length() -> usize {
    80
}

/// Changelog configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogConfig {
    /// Commit fields to group by when none are given on the command line.
    #[serde(default)]
    pub groupby: Vec<String>,

    /// Revision range used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
}
