//! Git repository wrapper.

use std::path::Path;

use git2::Repository as Git2Repo;
use tracing::debug;

use crate::{GitError, GitResult};

/// A Git repository wrapper.
pub struct Repository {
    pub(crate) inner: Git2Repo,
}

impl Repository {
    /// Opens a repository at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a valid Git repository.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner = Git2Repo::open(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Discovers the repository from the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found.
    pub fn discover() -> GitResult<Self> {
        Self::discover_from(".")
    }

    /// Discovers the repository containing the given path.
    ///
    /// Walks up the directory tree until a repository is found.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found.
    pub fn discover_from(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner =
            Git2Repo::discover(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        debug!(git_dir = %inner.path().display(), "discovered repository");
        Ok(Self { inner })
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.workdir().unwrap_or_else(|| self.inner.path())
    }

    /// Returns the `.git` directory.
    #[must_use]
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Returns true if the repository has a working tree.
    #[must_use]
    pub fn has_work_tree(&self) -> bool {
        !self.inner.is_bare()
    }
}

/// Returns true if `path` is inside the working tree of a repository.
pub fn is_inside_work_tree(path: impl AsRef<Path>) -> bool {
    Repository::discover_from(path).is_ok_and(|repo| repo.has_work_tree())
}
