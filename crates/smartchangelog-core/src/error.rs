//! Changelog error types.

use thiserror::Error;

/// Changelog-related errors.
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// A log entry could not be parsed.
    #[error("commit error: {0}")]
    Commit(#[from] smartchangelog_commit::CommitError),

    /// A grouping field name that is not a commit attribute.
    #[error("unknown field: {0} (expected one of: id, author, date, type, scope, subject, body)")]
    UnknownField(String),
}

/// Result type for changelog operations.
pub type ChangelogResult<T> = Result<T, ChangelogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_display() {
        let err = ChangelogError::UnknownField("color".to_string());
        assert!(err.to_string().starts_with("unknown field: color"));
    }

    #[test]
    fn test_commit_error_display() {
        let err = ChangelogError::from(smartchangelog_commit::CommitError::MalformedEntry(
            "garbage".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "commit error: not a git log entry: \"garbage\""
        );
    }
}
