//! Git abstraction layer for smartchangelog.
//!
//! This crate provides the Git side of the tool:
//! - Repository discovery
//! - `git log --date iso` shaped log text for a revision range
//! - `commit-msg` hook installation

mod error;
mod hook;
mod log;
mod repository;
#[cfg(test)]
mod testing;

pub use error::{GitError, GitResult};
pub use hook::{COMMIT_MSG_HOOK, hook_script};
pub use log::{LogSource, format_entry};
pub use repository::{Repository, is_inside_work_tree};
