//! Log text in the `git log --date iso` format.

use std::fmt::Write;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use git2::{ErrorCode, Signature, Sort};
use smartchangelog_commit::date_to_str;
use tracing::debug;

use crate::{GitError, GitResult, Repository};

/// Provides raw log text for a revision range.
pub trait LogSource {
    /// Returns the log for `range`, newest commit first.
    ///
    /// `range` is either `<from>..<to>` or a single revision; `None` means
    /// everything reachable from HEAD, and an empty log when HEAD is unborn.
    ///
    /// # Errors
    ///
    /// Returns an error if the range cannot be resolved or the history
    /// cannot be read.
    fn log(&self, range: Option<&str>) -> GitResult<String>;
}

impl LogSource for Repository {
    fn log(&self, range: Option<&str>) -> GitResult<String> {
        let mut revwalk = self.inner.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;

        match range {
            Some(range) if range.contains("..") => revwalk
                .push_range(range)
                .map_err(|_| GitError::InvalidRange(range.to_string()))?,
            Some(revision) => {
                let commit = self
                    .inner
                    .revparse_single(revision)
                    .and_then(|object| object.peel_to_commit())
                    .map_err(|_| GitError::InvalidRange(revision.to_string()))?;
                revwalk.push(commit.id())?;
            }
            None => match self.inner.head() {
                Err(err) if err.code() == ErrorCode::UnbornBranch => {
                    debug!("HEAD is unborn, empty log");
                    return Ok(String::new());
                }
                _ => revwalk.push_head()?,
            },
        }

        let mut output = String::new();
        let mut count = 0_usize;
        for oid in revwalk {
            let commit = self.inner.find_commit(oid?)?;
            if count > 0 {
                output.push('\n');
            }
            output.push_str(&format_entry(&commit));
            count += 1;
        }

        debug!(?range, commits = count, "read log");
        Ok(output)
    }
}

/// Formats one commit the way `git log --date iso` prints it.
#[must_use]
pub fn format_entry(commit: &git2::Commit<'_>) -> String {
    let mut output = String::new();
    _ = writeln!(output, "commit {}", commit.id());

    if commit.parent_count() > 1 {
        let parents: Vec<String> = commit
            .parent_ids()
            .map(|id| id.to_string().chars().take(7).collect())
            .collect();
        _ = writeln!(output, "Merge: {}", parents.join(" "));
    }

    let author = commit.author();
    _ = writeln!(
        output,
        "Author: {} <{}>",
        author.name().unwrap_or("Unknown"),
        author.email().unwrap_or("")
    );
    _ = writeln!(output, "Date:   {}", date_to_str(&author_date(&author)));
    output.push('\n');

    let message = String::from_utf8_lossy(commit.message_bytes());
    for line in message.trim_end().lines() {
        if line.is_empty() {
            output.push('\n');
        } else {
            _ = writeln!(output, "    {line}");
        }
    }

    output
}

fn author_date(signature: &Signature<'_>) -> DateTime<FixedOffset> {
    let when = signature.when();
    let offset =
        FixedOffset::east_opt(when.offset_minutes() * 60).unwrap_or_else(|| Utc.fix());
    DateTime::from_timestamp(when.seconds(), 0)
        .unwrap_or_default()
        .with_timezone(&offset)
}
