//! Core library for smartchangelog.
//!
//! This crate turns raw `git log` text into a grouped report:
//! - [`Changelog`]: Splits the log into entries and parses each commit
//! - [`Criterion`]: The commit fields commits can be grouped by
//! - [`Node`]: The grouping tree built by [`Changelog::group_by`]
//! - [`render`]: Renders a tree as nested markdown sections

mod changelog;
mod criterion;
mod error;
mod node;
mod report;

pub use changelog::Changelog;
pub use criterion::{Criterion, Key};
pub use error::{ChangelogError, ChangelogResult};
pub use node::{Group, Heading, Node, UNKNOWN_GROUP, group_by};
pub use report::render;
