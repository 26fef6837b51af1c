//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ChartFormat`] - image format options
//! - [`ReportKind`] - statistics report options
//!
//! Both enums convert into the library types
//! ([`ImageFormat`], [`ReportFormat`]) so they can be used outside of the
//! CLI as well:
//!
//! ```rust
//! use chatplot::cli::ChartFormat;
//! use chatplot::config::ImageFormat;
//!
//! let format: ImageFormat = ChartFormat::Svg.into();
//! assert_eq!(format.extension(), "svg");
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{ChartConfig, ImageFormat, ParserConfig};
use crate::error::Result;
use crate::stats::FilterConfig;
use crate::stats::report::ReportFormat;

/// Plot monthly activity and per-sender statistics of an exported chat log.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatplot")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatplot family
    chatplot family --data-dir exports -o plots --format svg
    chatplot friends --per-sender --report csv
    chatplot friends --no-save --after 2023-01-01 --from Alice")]
pub struct Args {
    /// Chat name; the log is read from <DATA_DIR>/<CHAT>.txt
    pub chat: String,

    /// Directory holding the chat logs
    #[arg(long, value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Root directory for charts; files go to <OUTPUT>/<CHAT>/
    #[arg(short, long, value_name = "DIR", default_value = "plots")]
    pub output: PathBuf,

    /// Image format of saved charts
    #[arg(short, long, value_enum, default_value = "png")]
    pub format: ChartFormat,

    /// Print chart data instead of saving image files
    #[arg(long)]
    pub no_save: bool,

    /// Also plot one monthly chart per sender
    #[arg(long)]
    pub per_sender: bool,

    /// Keep the last message of the log
    #[arg(long)]
    pub include_last: bool,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep messages from this sender only
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Also write a statistics report next to the charts
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub report: Option<ReportKind>,

    /// Log level (error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Args {
    /// Path of the chat log to read.
    pub fn input_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.txt", self.chat))
    }

    /// Directory that receives charts and reports.
    pub fn chat_dir(&self) -> PathBuf {
        self.output.join(&self.chat)
    }

    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new().with_flush_trailing(self.include_last)
    }

    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig::new().with_format(self.format.into())
    }

    /// Builds the filter from `--after`, `--before` and `--from`.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut filter = FilterConfig::new();
        if let Some(after) = &self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(before) = &self.before {
            filter = filter.with_date_to(before)?;
        }
        if let Some(from) = &self.from {
            filter = filter.with_sender(from.clone());
        }
        Ok(filter)
    }
}

/// Image format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    /// PNG bitmap (default)
    #[default]
    Png,

    /// SVG vector image
    Svg,
}

impl From<ChartFormat> for ImageFormat {
    fn from(format: ChartFormat) -> ImageFormat {
        match format {
            ChartFormat::Png => ImageFormat::Png,
            ChartFormat::Svg => ImageFormat::Svg,
        }
    }
}

/// Statistics report options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// monthly.csv and senders.csv, semicolon delimited
    Csv,

    /// summary.json
    Json,
}

impl From<ReportKind> for ReportFormat {
    fn from(kind: ReportKind) -> ReportFormat {
        match kind {
            ReportKind::Csv => ReportFormat::Csv,
            ReportKind::Json => ReportFormat::Json,
        }
    }
}
