//! Commit record parsed from one `git log` entry.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CommitError, CommitResult, CommitType, MessageRules, ParsedMessage, str_to_date};

static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)\Acommit (?P<id>[0-9a-f]{40})(?: [^\n]*)?\n(?:[^\n]*\n)*?Author: (?P<author>[^\n]*)\n(?:[^\n]*\n)*?Date: (?P<date>[^\n]*)(?P<message>.*)\z",
    )
    .expect("invalid regex")
});

/// One commit of the log.
///
/// Entries whose message breaks the convention still produce a commit, with
/// `type` and `scope` absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The 40 character commit hash.
    pub id: String,

    /// The author, as printed by git (`Name <email>`).
    pub author: String,

    /// The author date, with its original UTC offset.
    pub date: DateTime<FixedOffset>,

    /// The commit type.
    pub r#type: Option<CommitType>,

    /// The optional scope.
    pub scope: Option<String>,

    /// The subject.
    pub subject: Option<String>,

    /// The body.
    pub body: Option<String>,
}

impl Commit {
    /// Creates a commit from its metadata and parsed message.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        author: impl Into<String>,
        date: DateTime<FixedOffset>,
        message: &ParsedMessage,
    ) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            date,
            r#type: message.r#type(),
            scope: message.scope().map(str::to_string),
            subject: message.subject().map(str::to_string),
            body: message.body().map(str::to_string),
        }
    }

    /// Parses one log entry with the default [`MessageRules`].
    ///
    /// # Errors
    ///
    /// Returns an error if the entry has no `commit`/`Author:`/`Date:` header
    /// or if the date is malformed.
    pub fn parse(entry: &str) -> CommitResult<Self> {
        Self::parse_with(entry, &MessageRules::default())
    }

    /// Parses one log entry.
    ///
    /// The message block is dedented line by line before validation; a
    /// message that fails validation is split into subject and body instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry has no `commit`/`Author:`/`Date:` header
    /// or if the date is malformed.
    pub fn parse_with(entry: &str, rules: &MessageRules) -> CommitResult<Self> {
        let captures = ENTRY_RE
            .captures(entry)
            .ok_or_else(|| CommitError::MalformedEntry(first_line(entry).to_string()))?;

        let id = &captures["id"];
        let date = str_to_date(captures["date"].trim())?;
        let message = ParsedMessage::parse(&strip_lines(&captures["message"]), rules);
        if !message.is_strict() {
            debug!(id, subject = ?message.subject(), "non conventional commit");
        }

        Ok(Self::new(id, captures["author"].trim(), date, &message))
    }

    /// Returns the short hash (first 7 characters).
    #[must_use]
    pub fn short_id(&self) -> &str {
        &self.id[..7.min(self.id.len())]
    }
}

/// Trims surrounding spaces and newlines, then every line.
///
/// Interior blank lines are kept.
#[must_use]
pub fn strip_lines(text: &str) -> String {
    text.trim_matches(|c| c == ' ' || c == '\n')
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}
