//! Commit types for smartchangelog.
//!
//! This crate provides the commit level building blocks:
//! - [`CommitType`]: The closed set of commit categories
//! - [`CommitMessage`]: A message validated against `<type>(<scope>): <subject>`
//! - [`ParsedMessage`]: Either a strict parse or a best-effort fallback
//! - [`Commit`]: One `git log` entry parsed into a structured record

mod commit;
mod commit_type;
mod date;
mod error;
mod message;

pub use commit::{Commit, strip_lines};
pub use commit_type::CommitType;
pub use date::{DATE_FORMAT, date_to_str, str_to_date};
pub use error::{CommitError, CommitResult, CommitSyntaxError};
pub use message::{
    BODY_LINE_MAX_LENGTH, CommitMessage, FIRST_LINE_MAX_LENGTH, FirstLine, MessageRules,
    ParsedMessage,
};
