//! Commit type enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CommitSyntaxError;

/// Category of a commit, taken from the `<type>` token of its first line.
///
/// Types are ordered by their rank, which is the declaration order below.
/// Grouped reports list `feat` before `fix`, `fix` before `docs`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum CommitType {
    /// New feature for the user.
    Feat = 0,
    /// Bug fix for the user.
    Fix = 1,
    /// Documentation changes.
    Docs = 2,
    /// Formatting only.
    Style = 3,
    /// Refactoring production code.
    Refactor = 4,
    /// Tests only.
    Test = 5,
    /// Build scripts, CI, maintenance.
    Chore = 6,
}

impl CommitType {
    /// All commit types, in rank order.
    pub const ALL: [Self; 7] = [
        Self::Feat,
        Self::Fix,
        Self::Docs,
        Self::Style,
        Self::Refactor,
        Self::Test,
        Self::Chore,
    ];

    /// Returns the stable rank used for ordering.
    #[must_use]
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Returns the lowercase token used in commit messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Refactor => "refactor",
            Self::Test => "test",
            Self::Chore => "chore",
        }
    }

    /// Returns the human readable description shown in the help text.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Feat => "new feature for the user, not a new feature for build script",
            Self::Fix => "bug fix for the user, not a fix to a build script",
            Self::Docs => "changes to the documentation",
            Self::Style => "formatting, missing semi colons, etc; no production code change",
            Self::Refactor => "refactoring production code, eg. renaming a variable",
            Self::Test => "adding missing tests, refactoring tests; no production code change",
            Self::Chore => {
                "updating build scripts, continuous integration scripts, etc; no production code change"
            }
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CommitType {
    type Err = CommitSyntaxError;

    /// Matching is case sensitive: only the lowercase token is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|commit_type| commit_type.name() == s)
            .ok_or_else(|| CommitSyntaxError::UnknownType(s.to_string()))
    }
}
