//! Subcommand implementations.

pub mod changelog;
pub mod check;
pub mod hook;
pub mod init;

use anyhow::{Context, Result};
use smartchangelog_commit::MessageRules;
use smartchangelog_config::{Config, load_config_or_default};

/// Loads the configuration found from the current directory, or the defaults.
fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().context("failed to read current directory")?;
    load_config_or_default(current_dir).context("failed to load configuration")
}

/// Builds the message rules from the configured limits.
fn message_rules(config: &Config) -> MessageRules {
    MessageRules {
        first_line_max_length: config.message.first_line_max_length,
        body_line_max_length: config.message.body_line_max_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_rules_from_default_config() {
        assert_eq!(message_rules(&Config::default()), MessageRules::default());
    }

    #[test]
    fn test_message_rules_from_custom_config() {
        let mut config = Config::default();
        config.message.first_line_max_length = 50;
        config.message.body_line_max_length = 72;

        let rules = message_rules(&config);
        assert_eq!(rules.first_line_max_length, 50);
        assert_eq!(rules.body_line_max_length, 72);
    }
}
