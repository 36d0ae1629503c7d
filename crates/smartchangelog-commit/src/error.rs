//! Commit error types.

use thiserror::Error;

/// A commit message that does not follow the `<type>(<scope>): <subject>` format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitSyntaxError {
    /// The first line exceeds the configured maximum length.
    #[error("first line too long: {length} characters, at most {max} allowed")]
    FirstLineTooLong {
        /// Length of the offending line, in characters.
        length: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The first line does not match `<type>(<scope>): <subject>`.
    #[error("malformed first line: {0:?} doesn't follow the pattern <type>(<scope>): <subject>")]
    MalformedFirstLine(String),

    /// The type token is not one of the known commit types.
    #[error("unknown commit type: {0}")]
    UnknownType(String),

    /// A body line exceeds the configured maximum length.
    #[error("body line too long: line {line} has {length} characters, at most {max} allowed")]
    BodyLineTooLong {
        /// 1-based index of the line inside the body.
        line: usize,
        /// Length of the offending line, in characters.
        length: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// Errors raised while parsing a `git log` entry.
#[derive(Debug, Error)]
pub enum CommitError {
    /// The date field does not use the `YYYY-MM-DD HH:MM:SS ±HHMM` format.
    #[error("invalid date {value:?}: {source}")]
    InvalidDate {
        /// The raw date field.
        value: String,
        /// Underlying chrono error.
        #[source]
        source: chrono::ParseError,
    },

    /// The text is not a log entry at all.
    #[error("not a git log entry: {0:?}")]
    MalformedEntry(String),
}

/// Result type for commit parsing.
pub type CommitResult<T> = Result<T, CommitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line_too_long_display() {
        let err = CommitSyntaxError::FirstLineTooLong {
            length: 71,
            max: 70,
        };
        assert_eq!(
            err.to_string(),
            "first line too long: 71 characters, at most 70 allowed"
        );
    }

    #[test]
    fn test_unknown_type_display() {
        let err = CommitSyntaxError::UnknownType("bogus".to_string());
        assert_eq!(err.to_string(), "unknown commit type: bogus");
    }

    #[test]
    fn test_malformed_first_line_display() {
        let err = CommitSyntaxError::MalformedFirstLine("bad message".to_string());
        assert!(err.to_string().starts_with("malformed first line: \"bad message\""));
    }

    #[test]
    fn test_body_line_too_long_display() {
        let err = CommitSyntaxError::BodyLineTooLong {
            line: 2,
            length: 81,
            max: 80,
        };
        assert_eq!(
            err.to_string(),
            "body line too long: line 2 has 81 characters, at most 80 allowed"
        );
    }

    #[test]
    fn test_malformed_entry_is_debug() {
        let err = CommitError::MalformedEntry("garbage".to_string());
        let debug = format!("{err:?}");
        assert!(debug.contains("MalformedEntry"));
    }
}
