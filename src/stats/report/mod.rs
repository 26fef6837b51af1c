//! Statistics reports.
//!
//! [`ChatSummary`] gathers everything the charts show into one serializable
//! value. The writers turn it into files next to the charts:
//! - [`write_csv`] / [`to_monthly_csv`] / [`to_senders_csv`] - semicolon
//!   delimited tables - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - one pretty-printed JSON document -
//!   requires `json-output` feature
//!
//! # Example
//!
//! ```rust
//! use chatplot::parser::ChatLogParser;
//! use chatplot::stats::report::ChatSummary;
//!
//! let log = "\
//! 1/2/23, 14:05 - Alice: Hello
//! 1/2/23, 14:07 - Bob: <Media omitted>
//! 1/2/23, 14:08 - Alice: bye
//! ";
//! let messages = ChatLogParser::new().parse_str(log)?;
//! let summary = ChatSummary::build("friends", &messages);
//!
//! assert_eq!(summary.messages, 2);
//! assert_eq!(summary.months[0].month, "01/23");
//! assert_eq!(summary.senders[1].media_count, 1);
//! # Ok::<(), chatplot::ChatplotError>(())
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_monthly_csv, to_senders_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::message::DatedMessage;

use super::{monthly_counts, sender_stats};

/// One month row of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRow {
    /// `MM/YY`
    pub month: String,
    pub total: usize,
    pub text: usize,
    pub media: usize,
}

/// One sender row of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderRow {
    pub sender: String,
    pub message_count: usize,
    pub char_count: usize,
    pub media_count: usize,
    /// `None` for senders without text messages.
    pub average_length: Option<f64>,
}

/// All statistics for one chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSummary {
    pub chat_name: String,
    /// Number of parsed messages, `Unknown` senders included.
    pub messages: usize,
    pub months: Vec<MonthRow>,
    pub senders: Vec<SenderRow>,
}

impl ChatSummary {
    /// Aggregates `messages` into a summary.
    pub fn build(chat_name: impl Into<String>, messages: &[DatedMessage]) -> Self {
        let months = monthly_counts(messages)
            .into_iter()
            .map(|(bucket, stats)| MonthRow {
                month: bucket.label(),
                total: stats.total,
                text: stats.text,
                media: stats.media,
            })
            .collect();

        let senders = sender_stats(messages)
            .into_iter()
            .map(|(sender, stats)| SenderRow {
                sender,
                message_count: stats.message_count,
                char_count: stats.char_count,
                media_count: stats.media_count,
                average_length: stats.average_length(),
            })
            .collect();

        Self {
            chat_name: chat_name.into(),
            messages: messages.len(),
            months,
            senders,
        }
    }
}

/// Report file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// `monthly.csv` and `senders.csv`
    Csv,
    /// `summary.json`
    Json,
}

impl ReportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Csv => write!(f, "CSV"),
            ReportFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown report format: '{s}'. Expected one of: csv, json")),
        }
    }
}

/// Writes `summary` in `format` into `dir`, returning the written paths.
#[cfg(all(feature = "csv-output", feature = "json-output"))]
pub fn write_report(
    summary: &ChatSummary,
    dir: &std::path::Path,
    format: ReportFormat,
) -> crate::Result<Vec<std::path::PathBuf>> {
    std::fs::create_dir_all(dir)?;
    match format {
        ReportFormat::Csv => write_csv(summary, dir),
        ReportFormat::Json => write_json(summary, dir).map(|path| vec![path]),
    }
}
