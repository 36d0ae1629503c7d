//! Commit message grammar and validation.
//!
//! A message is a first line `<type>(<scope>): <subject>` optionally followed
//! by a body. The first line ends at the first newline; everything after it is
//! body text and is only checked for line length. CRLF line endings are read
//! as plain newlines.

use std::borrow::Cow;
use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CommitSyntaxError, CommitType};

/// Default maximum length of the first line, in characters.
pub const FIRST_LINE_MAX_LENGTH: usize = 70;

/// Default maximum length of each body line, in characters.
pub const BODY_LINE_MAX_LENGTH: usize = 80;

static FIRST_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>[a-z]+)(?:\((?P<scope>[^\n\t]+)\))?: (?P<subject>.+)$")
        .expect("invalid regex")
});

static NEWLINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("invalid regex"));

/// Line length limits applied by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRules {
    /// Maximum length of the first line.
    pub first_line_max_length: usize,
    /// Maximum length of every body line.
    pub body_line_max_length: usize,
}

impl Default for MessageRules {
    fn default() -> Self {
        Self {
            first_line_max_length: FIRST_LINE_MAX_LENGTH,
            body_line_max_length: BODY_LINE_MAX_LENGTH,
        }
    }
}

/// The parsed first line of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstLine {
    /// The commit type.
    pub r#type: CommitType,
    /// The optional scope.
    pub scope: Option<String>,
    /// The subject, never empty.
    pub subject: String,
}

/// A message that follows the commit convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitMessage {
    /// The commit type.
    pub r#type: CommitType,

    /// The optional scope.
    pub scope: Option<String>,

    /// The subject (first line without type and scope prefix).
    pub subject: String,

    /// Everything after the first line, if anything.
    pub body: Option<String>,
}

impl CommitMessage {
    /// Parses a message with the default [`MessageRules`].
    ///
    /// # Errors
    ///
    /// Returns the first rule the message violates.
    pub fn parse(message: &str) -> Result<Self, CommitSyntaxError> {
        Self::parse_with(message, &MessageRules::default())
    }

    /// Parses a message with the given rules.
    ///
    /// Rules are checked in order: first line length, first line format,
    /// commit type, then body line lengths.
    ///
    /// # Errors
    ///
    /// Returns the first rule the message violates.
    pub fn parse_with(message: &str, rules: &MessageRules) -> Result<Self, CommitSyntaxError> {
        let message = normalize_newlines(message);
        let (first_line, body) = match message.split_once('\n') {
            Some((first_line, body)) => (first_line, Some(body)),
            None => (&*message, None),
        };

        let FirstLine {
            r#type,
            scope,
            subject,
        } = Self::parse_first_line(first_line, rules)?;

        let body = match body {
            Some(body) => Some(Self::parse_body(body, rules)?),
            None => None,
        };

        Ok(Self {
            r#type,
            scope,
            subject,
            body: body.filter(|b| !b.is_empty()).map(str::to_string),
        })
    }

    /// Parses and validates the first line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is too long, malformed, or uses an
    /// unknown type.
    pub fn parse_first_line(
        first_line: &str,
        rules: &MessageRules,
    ) -> Result<FirstLine, CommitSyntaxError> {
        let length = first_line.chars().count();
        if length > rules.first_line_max_length {
            return Err(CommitSyntaxError::FirstLineTooLong {
                length,
                max: rules.first_line_max_length,
            });
        }

        let captures = FIRST_LINE_RE
            .captures(first_line)
            .ok_or_else(|| CommitSyntaxError::MalformedFirstLine(first_line.to_string()))?;

        let r#type = captures["type"].parse::<CommitType>()?;
        let scope = captures.name("scope").map(|m| m.as_str().to_string());
        let subject = captures["subject"].to_string();

        Ok(FirstLine {
            r#type,
            scope,
            subject,
        })
    }

    /// Validates every body line against the configured length.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first line that is too long.
    pub fn parse_body<'a>(
        body: &'a str,
        rules: &MessageRules,
    ) -> Result<&'a str, CommitSyntaxError> {
        for (index, line) in body.split('\n').enumerate() {
            let length = line.chars().count();
            if length > rules.body_line_max_length {
                return Err(CommitSyntaxError::BodyLineTooLong {
                    line: index + 1,
                    length,
                    max: rules.body_line_max_length,
                });
            }
        }
        Ok(body)
    }

    /// Lists the allowed types with their descriptions, one per line.
    #[must_use]
    pub fn format_allowed_types() -> String {
        let mut output = String::new();
        for commit_type in CommitType::ALL {
            _ = write!(
                output,
                "\n\t* {}: {}",
                commit_type.name(),
                commit_type.description()
            );
        }
        output
    }

    /// Returns the format help shown when a message is rejected.
    #[must_use]
    pub fn help(rules: &MessageRules) -> String {
        format!(
            "Your commit message has to follow this format:
<type>(<scope>): <subject>
<body>

Where :
Message first line (type, scope and subject)
    The first line cannot be longer than {first_line_max} characters.
    The type and scope should always be lowercase as shown
    below.
    Allowed <type> values: {allowed_types}
    Example <scope> values:
        * ui
        * business
        * model
        * widget
        * config
        etc.
    The <scope> can be empty (e.g. if the change is a global or difficult
    to assign to a single component), in which case the parentheses are
    omitted.

Message body (optional)
    The body lines cannot be longer than {body_max} characters.
    uses the imperative, present tense: \"change\" not \"changed\" nor
    \"changes\"
    includes motivation for the change and contrasts with previous behavior",
            first_line_max = rules.first_line_max_length,
            allowed_types = Self::format_allowed_types(),
            body_max = rules.body_line_max_length,
        )
    }
}

/// Turns CRLF line endings into plain newlines.
fn normalize_newlines(message: &str) -> Cow<'_, str> {
    if message.contains('\r') {
        Cow::Owned(message.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(message)
    }
}

/// Outcome of parsing a message taken from the log.
///
/// Log entries are never rejected: a message that breaks the convention is
/// kept as a [`ParsedMessage::Fallback`] with a plain subject/body split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedMessage {
    /// The message follows the convention.
    Strict(CommitMessage),

    /// Best-effort split of a non conventional message.
    Fallback {
        /// First non blank line.
        subject: Option<String>,
        /// Remaining lines, blank lines removed.
        body: Option<String>,
    },
}

impl ParsedMessage {
    /// Parses a message strictly, falling back to a subject/body split.
    #[must_use]
    pub fn parse(message: &str, rules: &MessageRules) -> Self {
        match CommitMessage::parse_with(message, rules) {
            Ok(message) => Self::Strict(message),
            Err(err) => {
                debug!(%err, "message does not follow the convention, using fallback");
                Self::fallback(message)
            }
        }
    }

    /// Splits a message into subject and body without any validation.
    #[must_use]
    pub fn fallback(message: &str) -> Self {
        let collapsed = NEWLINES_RE.replace_all(message, "\n");
        let (subject, body) = match collapsed.split_once('\n') {
            Some((subject, body)) => (subject, Some(body)),
            None => (collapsed.as_ref(), None),
        };

        Self::Fallback {
            subject: non_empty(subject),
            body: body.and_then(non_empty),
        }
    }

    /// Returns true for a strict parse.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Strict(_))
    }

    /// Returns the commit type, absent for a fallback.
    #[must_use]
    pub fn r#type(&self) -> Option<CommitType> {
        match self {
            Self::Strict(message) => Some(message.r#type),
            Self::Fallback { .. } => None,
        }
    }

    /// Returns the scope, absent for a fallback.
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        match self {
            Self::Strict(message) => message.scope.as_deref(),
            Self::Fallback { .. } => None,
        }
    }

    /// Returns the subject.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::Strict(message) => Some(&message.subject),
            Self::Fallback { subject, .. } => subject.as_deref(),
        }
    }

    /// Returns the body.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Strict(message) => message.body.as_deref(),
            Self::Fallback { body, .. } => body.as_deref(),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
