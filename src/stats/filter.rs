//! Filter messages by date range and sender.
//!
//! # Example
//!
//! ```
//! use chatplot::parser::ChatLogParser;
//! use chatplot::stats::filter::{FilterConfig, apply_filters};
//!
//! # fn main() -> chatplot::Result<()> {
//! let log = "\
//! 1/2/23, 14:05 - Alice: Old
//! 6/15/23, 14:05 - Alice: New
//! 6/16/23, 14:05 - Bob: New too
//! 6/17/23, 14:05 - Bob: dropped
//! ";
//! let messages = ChatLogParser::new().parse_str(log)?;
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2023-06-01")?
//!     .with_sender("alice");
//! let filtered = apply_filters(messages, &config);
//!
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].body, "New\n");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Date bounds are inclusive whole days
//! - Sender matching is case-insensitive for ASCII characters
//! - [`Unknown`](crate::message::Sender::Unknown) messages never match a sender filter
//! - Multiple filters are combined with AND logic

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ChatplotError, Result};
use crate::message::DatedMessage;

/// Configuration for filtering messages by date and sender.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Include only messages on or after this day.
    pub date_from: Option<NaiveDate>,

    /// Include only messages on or before this day.
    pub date_to: Option<NaiveDate>,

    /// Include only messages from this sender (case-insensitive).
    pub sender: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date (inclusive), `YYYY-MM-DD`.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.date_from = Some(parse_day(date_str)?);
        Ok(self)
    }

    /// Sets the end date (inclusive), `YYYY-MM-DD`.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        self.date_to = Some(parse_day(date_str)?);
        Ok(self)
    }

    /// Sets the sender filter.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.date_from.is_some() || self.date_to.is_some() || self.sender.is_some()
    }

    /// Returns `true` if `msg` passes every active filter.
    pub fn matches(&self, msg: &DatedMessage) -> bool {
        let day = msg.timestamp.date();
        if self.date_from.is_some_and(|from| day < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| day > to) {
            return false;
        }
        match &self.sender {
            Some(wanted) => msg
                .sender
                .name()
                .is_some_and(|name| name.eq_ignore_ascii_case(wanted)),
            None => true,
        }
    }
}

fn parse_day(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatplotError::invalid_filter_date(date_str))
}

/// Keeps only messages matching all active filters.
pub fn apply_filters(messages: Vec<DatedMessage>, config: &FilterConfig) -> Vec<DatedMessage> {
    if !config.is_active() {
        return messages;
    }
    messages.into_iter().filter(|m| config.matches(m)).collect()
}
