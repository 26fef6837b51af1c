//! # Chatplot
//!
//! A Rust library for turning exported chat logs into monthly activity
//! statistics and charts.
//!
//! ## Overview
//!
//! A chat log is a plain text file where each message starts with a header
//! line:
//!
//! ```text
//! 1/2/23, 14:05 - Alice: Hello
//! and a second line
//! 1/3/23, 09:12 - Bob: <Media omitted>
//! ```
//!
//! Lines that do not start with a header continue the previous message.
//! Parsing happens in three steps:
//! 1. every line is classified as a header or a continuation ([`parsing::classify`])
//! 2. lines are folded into raw records ([`parsing::reconstruct`])
//! 3. dates are normalized into timestamps ([`parsing::date`])
//!
//! The resulting [`DatedMessage`]s feed the aggregations in [`stats`] and
//! the charts in [`chart`].
//!
//! ## Quick Start
//!
//! ```rust
//! use chatplot::prelude::*;
//!
//! let log = "\
//! 1/2/23, 14:05 - Alice: Hello
//! 1/2/23, 14:07 - Bob: <Media omitted>
//! 2/9/23, 08:00 - Alice: Good morning
//! 2/9/23, 08:01 - Bob: morning
//! ";
//!
//! // The last message is never closed by a following header and is dropped.
//! let messages = ChatLogParser::new().parse_str(log)?;
//! assert_eq!(messages.len(), 3);
//!
//! let months = monthly_counts(&messages);
//! assert_eq!(months[0].1.total, 2);
//! assert_eq!(months[0].1.media, 1);
//!
//! let senders = sender_stats(&messages);
//! assert_eq!(senders["Alice"].message_count, 2);
//! # Ok::<(), chatplot::ChatplotError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ChatLogParser`](parser::ChatLogParser), file and string entry points
//! - [`parsing`] - line classification, record reconstruction, date normalization
//! - [`message`] - [`RawRecord`](message::RawRecord), [`DatedMessage`], [`Sender`](message::Sender)
//! - [`stats`] - monthly counts, per-sender statistics, filters and reports
//! - [`chart`] - chart data, rendering and the [`Presenter`](chart::Presenter)
//! - [`config`] - parser and chart configuration
//! - [`error`] - [`ChatplotError`] and [`Result`]
//! - `cli` - command-line argument types - requires `cli` feature
//!
//! ## Features
//!
//! - `charts` - PNG/SVG rendering with `plotters`
//! - `csv-output` - CSV reports
//! - `json-output` - JSON reports
//! - `cli` - the `chatplot` binary
//! - `gen-test` - the `gen_chat` log generator

pub mod chart;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod stats;

pub use error::{ChatplotError, Result};
pub use message::DatedMessage;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatplot::prelude::*;
/// ```
pub mod prelude {
    pub use crate::DatedMessage;
    pub use crate::error::{ChatplotError, Result};
    pub use crate::message::{RawRecord, Sender};

    pub use crate::config::{ChartConfig, ImageFormat, ParserConfig};
    pub use crate::parser::ChatLogParser;

    pub use crate::stats::report::{ChatSummary, ReportFormat};
    pub use crate::stats::{
        FilterConfig, MonthBucket, MonthStats, SenderStats, apply_filters, monthly_counts,
        partition_by_sender, sender_stats,
    };

    pub use crate::chart::{Chart, ChartSink, Presenter, build_charts};
}
