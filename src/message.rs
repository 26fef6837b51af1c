//! Message types produced by the chat log parser.
//!
//! Parsing happens in two steps, and each step has its own type:
//!
//! - [`RawRecord`] - what the reconstructor folds out of the line stream:
//!   the date prefix as written, the sender label, and the body text.
//! - [`DatedMessage`] - the same record after the date prefix has been
//!   normalized into a [`NaiveDateTime`] and the sender classified.
//!
//! # Example
//!
//! ```
//! use chatplot::message::{DatedMessage, Sender, MEDIA_PLACEHOLDER};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap().and_hms_opt(14, 5, 0).unwrap();
//! let msg = DatedMessage::new(ts, Sender::from_label("Alice"), MEDIA_PLACEHOLDER);
//!
//! assert!(msg.is_media());
//! assert_eq!(msg.sender.name(), Some("Alice"));
//! ```

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Body text the exporter writes in place of an attachment.
///
/// Comparison is exact, trailing newline included.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>\n";

/// Label that marks a message without a usable author.
pub const UNKNOWN_SENDER: &str = "Unknown";

/// A message as reconstructed from the line stream, before date parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Date prefix exactly as it appeared before `" - "`.
    pub date: String,
    /// Sender label between `" - "` and `": "`.
    pub sender: String,
    /// Body text, newlines preserved.
    pub body: String,
}

impl RawRecord {
    pub fn new(date: impl Into<String>, sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            sender: sender.into(),
            body: body.into(),
        }
    }
}

/// Author of a message.
///
/// A blank label, or the literal `Unknown`, maps to [`Sender::Unknown`].
/// Unknown messages still count toward monthly totals but are left out of
/// every per-sender statistic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Named(String),
    Unknown,
}

impl Sender {
    /// Classifies a raw sender label.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.is_empty() || trimmed == UNKNOWN_SENDER {
            Sender::Unknown
        } else {
            Sender::Named(label.to_string())
        }
    }

    /// Returns the sender name, or `None` for [`Sender::Unknown`].
    pub fn name(&self) -> Option<&str> {
        match self {
            Sender::Named(name) => Some(name),
            Sender::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Sender::Unknown)
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::Named(name) => f.write_str(name),
            Sender::Unknown => f.write_str(UNKNOWN_SENDER),
        }
    }
}

/// A chat message with a normalized timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedMessage {
    /// When the message was sent (local time of the export, seconds default to zero when absent).
    pub timestamp: NaiveDateTime,

    /// Message author.
    pub sender: Sender,

    /// Message body.
    ///
    /// Multi-line messages keep their embedded newlines; a non-empty body
    /// always ends with `\n` unless it was the unterminated last line of
    /// the file.
    pub body: String,
}

impl DatedMessage {
    pub fn new(timestamp: NaiveDateTime, sender: Sender, body: impl Into<String>) -> Self {
        Self {
            timestamp,
            sender,
            body: body.into(),
        }
    }

    /// Returns `true` if the body is exactly the media placeholder.
    pub fn is_media(&self) -> bool {
        is_media(&self.body)
    }

    /// Body length in characters.
    pub fn char_len(&self) -> usize {
        self.body.chars().count()
    }
}

/// Returns `true` if `body` is exactly [`MEDIA_PLACEHOLDER`].
pub fn is_media(body: &str) -> bool {
    body == MEDIA_PLACEHOLDER
}
