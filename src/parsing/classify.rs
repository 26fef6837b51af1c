//! Header / continuation line classification.
//!
//! Exported chat logs start every message with a header:
//!
//! ```text
//! 1/2/23, 14:05 - Alice: Hello
//! ```
//!
//! Anything that does not look exactly like that is a continuation of the
//! message above it, including lines that happen to contain `" - "` after
//! something that is not a date, and system notices that have no
//! `"Sender: "` part.

use std::sync::LazyLock;

use regex::Regex;

/// Separator between the date prefix and the rest of a header line.
pub const DATE_SEPARATOR: &str = " - ";

/// Separator between the sender label and the message body.
pub const SENDER_SEPARATOR: &str = ": ";

/// Month 1-12, day 1-31, two-digit year, then `H:MM` in 0-23 / 00-59.
/// ASCII digits only.
const DATE_PATTERN: &str =
    r"^(0?[1-9]|1[012])/([1-9]|[012][0-9]|3[01])/[0-9][0-9],[ \t]([01]?[0-9]|2?[0-3]):([0-5][0-9])$";

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATE_PATTERN).expect("date pattern is a valid regex"));

/// The parts of a header line, borrowed from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// Date prefix, e.g. `1/2/23, 14:05`.
    pub date: &'a str,
    /// Sender label, e.g. `Alice`.
    pub sender: &'a str,
    /// First fragment of the body, trailing newline included.
    pub body: &'a str,
}

/// What a single raw line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Header(Header<'a>),
    Continuation,
}

impl LineKind<'_> {
    pub fn is_header(&self) -> bool {
        matches!(self, LineKind::Header(_))
    }
}

/// Returns `true` if `prefix` is exactly a date prefix like `01/02/23, 9:05`.
pub fn is_date_prefix(prefix: &str) -> bool {
    DATE_REGEX.is_match(prefix)
}

/// Classifies one raw line.
///
/// Only the text before the first `" - "` is tested against the date
/// pattern. A header also needs a `": "` after the date separator; without
/// it the line is treated as a continuation.
///
/// # Example
///
/// ```
/// use chatplot::parsing::{classify_line, LineKind};
///
/// let kind = classify_line("1/2/23, 14:05 - Alice: Hello\n");
/// let LineKind::Header(header) = kind else { panic!("expected a header") };
/// assert_eq!(header.date, "1/2/23, 14:05");
/// assert_eq!(header.sender, "Alice");
/// assert_eq!(header.body, "Hello\n");
///
/// assert_eq!(classify_line("see you - later\n"), LineKind::Continuation);
/// ```
pub fn classify_line(line: &str) -> LineKind<'_> {
    let Some(sep) = line.find(DATE_SEPARATOR) else {
        return LineKind::Continuation;
    };

    let date = &line[..sep];
    if !is_date_prefix(date) {
        return LineKind::Continuation;
    }

    let rest = &line[sep + DATE_SEPARATOR.len()..];
    let Some(colon) = rest.find(SENDER_SEPARATOR) else {
        return LineKind::Continuation;
    };

    LineKind::Header(Header {
        date,
        sender: &rest[..colon],
        body: &rest[colon + SENDER_SEPARATOR.len()..],
    })
}
