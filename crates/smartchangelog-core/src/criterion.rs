//! Grouping criteria.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use smartchangelog_commit::{Commit, CommitType, date_to_str};

use crate::ChangelogError;

/// A commit field commits can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// The commit hash.
    Id,
    /// The author.
    Author,
    /// The author date.
    Date,
    /// The commit type.
    Type,
    /// The scope.
    Scope,
    /// The subject.
    Subject,
    /// The body.
    Body,
}

impl Criterion {
    /// All criteria, in commit field order.
    pub const ALL: [Self; 7] = [
        Self::Id,
        Self::Author,
        Self::Date,
        Self::Type,
        Self::Scope,
        Self::Subject,
        Self::Body,
    ];

    /// Returns the field name, used in section headers.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Author => "author",
            Self::Date => "date",
            Self::Type => "type",
            Self::Scope => "scope",
            Self::Subject => "subject",
            Self::Body => "body",
        }
    }

    /// Extracts the grouping key of a commit, `None` when the field is absent.
    #[must_use]
    pub fn key(self, commit: &Commit) -> Option<Key<'_>> {
        match self {
            Self::Id => Some(Key::Text(&commit.id)),
            Self::Author => Some(Key::Text(&commit.author)),
            Self::Date => Some(Key::Date(commit.date)),
            Self::Type => commit.r#type.map(Key::Type),
            Self::Scope => commit.scope.as_deref().map(Key::Text),
            Self::Subject => commit.subject.as_deref().map(Key::Text),
            Self::Body => commit.body.as_deref().map(Key::Text),
        }
    }

    /// Resolves a list of field names.
    ///
    /// # Errors
    ///
    /// Returns [`ChangelogError::UnknownField`] for the first name that is not
    /// a commit field.
    pub fn parse_all<I, S>(names: I) -> Result<Vec<Self>, ChangelogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().map(|name| name.as_ref().parse()).collect()
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Criterion {
    type Err = ChangelogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|criterion| criterion.name() == s)
            .ok_or_else(|| ChangelogError::UnknownField(s.to_string()))
    }
}

/// A grouping key.
///
/// Keys produced by one criterion always share a variant, so the derived
/// ordering is the natural ordering of the field: rank for types,
/// chronological for dates, lexicographic for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Key<'a> {
    /// A commit type.
    Type(CommitType),
    /// A date.
    Date(DateTime<FixedOffset>),
    /// Any text field.
    Text(&'a str),
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(commit_type) => write!(f, "{commit_type}"),
            Self::Date(date) => f.write_str(&date_to_str(date)),
            Self::Text(text) => f.write_str(text),
        }
    }
}
