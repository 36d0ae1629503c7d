//! Check command.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use smartchangelog_commit::{CommitMessage, CommitSyntaxError, MessageRules};

/// Git writes the message being committed to this file.
const COMMIT_EDITMSG: &str = "COMMIT_EDITMSG";

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Commit message to check (a path to COMMIT_EDITMSG is read as a file)
    #[arg(conflicts_with = "file")]
    pub message: Option<String>,

    /// Read the commit message from a file (`-` for stdin)
    #[arg(short = 'F', long)]
    pub file: Option<PathBuf>,
}

/// Resolves the message to check from the arguments.
fn read_message(args: CheckArgs) -> Result<String> {
    let file = match (args.message, args.file) {
        (Some(message), _) if message.contains(COMMIT_EDITMSG) => PathBuf::from(message),
        (Some(message), _) => return Ok(message),
        (None, Some(file)) => file,
        (None, None) => PathBuf::from("-"),
    };

    if file == Path::new("-") {
        let mut message = String::new();
        std::io::stdin()
            .read_to_string(&mut message)
            .context("failed to read commit message from stdin")?;
        return Ok(message);
    }

    debug!(path = %file.display(), "reading commit message");
    std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read commit message from {}", file.display()))
}

/// Validates a message, returning the text to print on rejection.
fn check(message: &str, rules: &MessageRules) -> Result<(), String> {
    CommitMessage::parse_with(message, rules)
        .map(|_| ())
        .map_err(|err: CommitSyntaxError| format!("{err}\n\n{}", CommitMessage::help(rules)))
}

/// Runs the check command.
pub fn run(args: CheckArgs) -> Result<ExitCode> {
    let config = super::load_config()?;
    let rules = super::message_rules(&config);
    let message = read_message(args)?;

    match check(&message, &rules) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(report) => {
            eprintln!("{report}");
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_check_valid_message() {
        assert!(check("feat(ui): add button", &MessageRules::default()).is_ok());
        assert!(check("fix: typo\nin the readme", &MessageRules::default()).is_ok());
    }

    #[test]
    fn test_check_invalid_message_prints_help() {
        let report = check("Add button", &MessageRules::default()).unwrap_err();
        assert!(report.starts_with("malformed first line"));
        assert!(report.contains("\n\nYour commit message has to follow this format:"));
    }

    #[test]
    fn test_check_uses_rules() {
        let rules = MessageRules {
            first_line_max_length: 10,
            ..MessageRules::default()
        };
        let report = check("feat: a longer subject", &rules).unwrap_err();
        assert!(report.starts_with("first line too long"));
        assert!(report.contains("cannot be longer than 10 characters"));
    }

    #[test]
    fn test_read_message_from_argument() {
        let args = CheckArgs {
            message: Some("feat: add".to_string()),
            file: None,
        };
        assert_eq!(read_message(args).unwrap(), "feat: add");
    }

    #[test]
    fn test_read_message_from_commit_editmsg() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(COMMIT_EDITMSG);
        std::fs::write(&path, "fix(core): null check\n").unwrap();

        let args = CheckArgs {
            message: Some(path.to_string_lossy().into_owned()),
            file: None,
        };
        assert_eq!(read_message(args).unwrap(), "fix(core): null check\n");
    }

    #[test]
    fn test_read_message_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("message.txt");
        std::fs::write(&path, "docs: readme").unwrap();

        let args = CheckArgs {
            message: None,
            file: Some(path),
        };
        assert_eq!(read_message(args).unwrap(), "docs: readme");
    }

    #[test]
    fn test_read_message_missing_file() {
        let args = CheckArgs {
            message: None,
            file: Some(PathBuf::from("/nonexistent/message.txt")),
        };
        let err = read_message(args).unwrap_err();
        assert!(err.to_string().contains("failed to read commit message"));
    }
}
