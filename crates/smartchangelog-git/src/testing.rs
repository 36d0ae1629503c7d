//! Repository fixtures shared by the unit tests.

use git2::{Oid, Repository as Git2Repository, Signature, Time};
use tempfile::TempDir;

use crate::Repository;

pub(crate) fn create_test_repo() -> (TempDir, Repository) {
    let temp_dir = TempDir::new().unwrap();
    let git2_repo = Git2Repository::init(temp_dir.path()).unwrap();

    // Configure user for commits
    let mut config = git2_repo.config().unwrap();
    config.set_str("user.name", "Test User").unwrap();
    config.set_str("user.email", "test@example.com").unwrap();

    let repo = Repository { inner: git2_repo };
    (temp_dir, repo)
}

/// Commits on HEAD at `seconds` since the epoch, in UTC+01:00.
pub(crate) fn create_commit(repo: &Repository, message: &str, seconds: i64) -> Oid {
    let parent = repo
        .inner
        .head()
        .ok()
        .and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
    commit_with_parents(repo, Some("HEAD"), message, seconds, &parents)
}

pub(crate) fn commit_with_parents(
    repo: &Repository,
    update_ref: Option<&str>,
    message: &str,
    seconds: i64,
    parents: &[&git2::Commit<'_>],
) -> Oid {
    let sig = Signature::new("Test User", "test@example.com", &Time::new(seconds, 60)).unwrap();
    let tree_id = {
        let mut index = repo.inner.index().unwrap();
        index.write_tree().unwrap()
    };
    let tree = repo.inner.find_tree(tree_id).unwrap();

    repo.inner
        .commit(update_ref, &sig, &sig, message, &tree, parents)
        .unwrap()
}
