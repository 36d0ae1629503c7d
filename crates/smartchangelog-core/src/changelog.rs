//! Changelog parsing.

use std::sync::LazyLock;

use regex::Regex;
use smartchangelog_commit::{Commit, MessageRules};
use tracing::debug;

use crate::{ChangelogResult, Criterion, Node, group_by};

static ENTRY_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^commit [0-9a-f]+").expect("invalid regex"));

/// The commits of a log, in log order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changelog {
    commits: Vec<Commit>,
}

impl Changelog {
    /// Creates a changelog from already parsed commits.
    #[must_use]
    pub fn new(commits: Vec<Commit>) -> Self {
        Self { commits }
    }

    /// Parses a `git log --date iso` output with the default [`MessageRules`].
    ///
    /// # Errors
    ///
    /// Returns an error if any entry is malformed or carries an invalid date.
    pub fn parse(log: &str) -> ChangelogResult<Self> {
        Self::parse_with(log, &MessageRules::default())
    }

    /// Parses a `git log --date iso` output.
    ///
    /// Entries start at every line beginning with `commit <hex>`. Text
    /// before the first entry is ignored. An id that is not exactly 40 hex
    /// characters is a malformed entry.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry is malformed or carries an invalid date.
    pub fn parse_with(log: &str, rules: &MessageRules) -> ChangelogResult<Self> {
        let starts: Vec<usize> = ENTRY_START_RE.find_iter(log).map(|m| m.start()).collect();

        let mut commits = Vec::with_capacity(starts.len());
        for (index, &start) in starts.iter().enumerate() {
            let end = starts.get(index + 1).copied().unwrap_or(log.len());
            commits.push(Commit::parse_with(&log[start..end], rules)?);
        }

        debug!(commits = commits.len(), "parsed changelog");
        Ok(Self { commits })
    }

    /// Returns the commits.
    #[must_use]
    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    /// Returns the number of commits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// Returns true if the changelog has no commit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Returns an iterator over the commits.
    pub fn iter(&self) -> std::slice::Iter<'_, Commit> {
        self.commits.iter()
    }

    /// Groups the commits into a tree, one level per criterion.
    #[must_use]
    pub fn group_by(&self, criteria: &[Criterion]) -> Node {
        debug!(?criteria, commits = self.len(), "grouping commits");
        group_by(&self.commits, criteria)
    }
}

impl From<Vec<Commit>> for Changelog {
    fn from(commits: Vec<Commit>) -> Self {
        Self::new(commits)
    }
}

impl FromIterator<Commit> for Changelog {
    fn from_iter<I: IntoIterator<Item = Commit>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Changelog {
    type Item = &'a Commit;
    type IntoIter = std::slice::Iter<'a, Commit>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
