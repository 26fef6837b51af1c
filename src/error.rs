//! Unified error types for chatplot.
//!
//! A single [`ChatplotError`] enum covers every failure the library can
//! report. Parsing itself is forgiving (malformed lines fold into the
//! previous message), so the errors that remain are the fatal ones: I/O,
//! a date prefix that passed the header pattern but is not a real date,
//! and chart or report writing failures.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatplot operations.
///
/// # Example
///
/// ```rust
/// use chatplot::error::Result;
/// use chatplot::DatedMessage;
///
/// fn my_function() -> Result<Vec<DatedMessage>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatplotError>;

/// The error type for all chatplot operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatplotError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The chat log doesn't exist
    /// - Permission denied
    /// - The output directory cannot be created
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A date string could not be interpreted as a date and time.
    ///
    /// Header lines are validated against the date pattern before they
    /// reach the normalizer, so this only fires for prefixes that look
    /// right but name an impossible date (e.g. `2/30/23, 10:00`).
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The date string that failed to parse
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// The chat name cannot be used as a file or directory name.
    #[error("Invalid chat name '{name}': {reason}")]
    InvalidChatName {
        /// The rejected chat name
        name: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Chart rendering failed.
    #[error("Failed to render chart{}: {message}", path.as_ref().map(|p| format!(" {}", p.display())).unwrap_or_default())]
    Chart {
        /// Backend error description
        message: String,
        /// Target file, if the chart was being saved
        path: Option<PathBuf>,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatplotError {
    /// Creates an invalid date error for a chat log date prefix.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatplotError::InvalidDate {
            input: input.into(),
            expected: "M/D/YY, H:MM",
        }
    }

    /// Creates an invalid date error for a filter bound.
    pub fn invalid_filter_date(input: impl Into<String>) -> Self {
        ChatplotError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid chat name error.
    pub fn invalid_chat_name(name: impl Into<String>, reason: &'static str) -> Self {
        ChatplotError::InvalidChatName {
            name: name.into(),
            reason,
        }
    }

    /// Creates a chart rendering error.
    pub fn chart(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        ChatplotError::Chart {
            message: message.into(),
            path,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatplotError::Io(_))
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatplotError::InvalidDate { .. })
    }

    /// Returns `true` if this is a chart rendering error.
    pub fn is_chart(&self) -> bool {
        matches!(self, ChatplotError::Chart { .. })
    }
}
