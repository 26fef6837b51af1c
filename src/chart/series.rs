//! Chart data, independent of any drawing backend.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use tracing::warn;

use crate::message::DatedMessage;
use crate::stats::{MonthBucket, MonthStats, SenderStats, monthly_counts};

/// File label of the whole-chat time series.
pub const MONTHLY_LABEL: &str = "monthly";
/// File label of the message/media bar chart.
pub const MESSAGES_LABEL: &str = "messages";
/// File label of the character count bar chart.
pub const CHARACTERS_LABEL: &str = "characters";
/// File label of the average length bar chart.
pub const AVERAGE_LENGTH_LABEL: &str = "average_length";

/// Monthly total/text/media lines.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesChart {
    /// File label, e.g. `monthly` or `monthly_Alice`.
    pub label: String,
    /// Sender name for per-sender breakdowns.
    pub sender: Option<String>,
    /// Buckets in chronological order.
    pub points: Vec<(MonthBucket, MonthStats)>,
}

impl TimeSeriesChart {
    /// Whole-chat series.
    pub fn from_messages(messages: &[DatedMessage]) -> Self {
        Self::from_counts(MONTHLY_LABEL, None, monthly_counts(messages))
    }

    /// Series for one sender.
    pub fn for_sender(sender: &str, points: Vec<(MonthBucket, MonthStats)>) -> Self {
        let label = format!("{MONTHLY_LABEL}_{}", file_safe(sender));
        Self::from_counts(label, Some(sender.to_string()), points)
    }

    pub fn from_counts(
        label: impl Into<String>,
        sender: Option<String>,
        points: Vec<(MonthBucket, MonthStats)>,
    ) -> Self {
        Self {
            label: label.into(),
            sender,
            points,
        }
    }

    /// Caption drawn above the chart.
    pub fn title(&self) -> String {
        match &self.sender {
            Some(sender) => format!("Messages per month: {sender}"),
            None => "Messages per month".to_string(),
        }
    }

    /// Axis label for bucket `index`, or an empty string between ticks.
    pub fn tick_label(&self, index: usize, stride: usize) -> String {
        if index % stride.max(1) != 0 {
            return String::new();
        }
        self.points
            .get(index)
            .map(|(bucket, _)| bucket.label())
            .unwrap_or_default()
    }

    /// Highest monthly total.
    pub fn max_total(&self) -> usize {
        self.points.iter().map(|(_, s)| s.total).max().unwrap_or(0)
    }

    pub fn totals(&self) -> Vec<usize> {
        self.points.iter().map(|(_, s)| s.total).collect()
    }

    pub fn texts(&self) -> Vec<usize> {
        self.points.iter().map(|(_, s)| s.text).collect()
    }

    pub fn media(&self) -> Vec<usize> {
        self.points.iter().map(|(_, s)| s.media).collect()
    }
}

/// One category on a bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub sender: String,
    pub value: f64,
    /// Second bar drawn over the first, e.g. media next to messages.
    pub overlay: Option<f64>,
}

/// Per-sender bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub label: String,
    pub title: String,
    pub y_desc: String,
    pub value_name: String,
    pub overlay_name: Option<String>,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Text messages with media overlaid.
    pub fn messages_and_media(stats: &BTreeMap<String, SenderStats>) -> Self {
        Self {
            label: MESSAGES_LABEL.to_string(),
            title: "Messages per sender".to_string(),
            y_desc: "Number of messages".to_string(),
            value_name: "messages".to_string(),
            overlay_name: Some("media".to_string()),
            bars: stats
                .iter()
                .map(|(sender, s)| Bar {
                    sender: sender.clone(),
                    value: s.message_count as f64,
                    overlay: Some(s.media_count as f64),
                })
                .collect(),
        }
    }

    /// Characters typed per sender.
    pub fn characters(stats: &BTreeMap<String, SenderStats>) -> Self {
        Self {
            label: CHARACTERS_LABEL.to_string(),
            title: "Characters per sender".to_string(),
            y_desc: "Number of characters".to_string(),
            value_name: "characters".to_string(),
            overlay_name: None,
            bars: stats
                .iter()
                .map(|(sender, s)| Bar {
                    sender: sender.clone(),
                    value: s.char_count as f64,
                    overlay: None,
                })
                .collect(),
        }
    }

    /// Average text message length per sender.
    ///
    /// Senders with only media messages get a zero bar.
    pub fn average_length(stats: &BTreeMap<String, SenderStats>) -> Self {
        let bars = stats
            .iter()
            .map(|(sender, s)| {
                let value = s.average_length().unwrap_or_else(|| {
                    warn!(sender = %sender, "no text messages, average length shown as 0");
                    0.0
                });
                Bar {
                    sender: sender.clone(),
                    value,
                    overlay: None,
                }
            })
            .collect();

        Self {
            label: AVERAGE_LENGTH_LABEL.to_string(),
            title: "Average message length".to_string(),
            y_desc: "Characters per message".to_string(),
            value_name: "average length".to_string(),
            overlay_name: None,
            bars,
        }
    }

    /// Largest bar or overlay value.
    pub fn max_value(&self) -> f64 {
        self.bars
            .iter()
            .flat_map(|b| std::iter::once(b.value).chain(b.overlay))
            .fold(0.0, f64::max)
    }
}

/// Any chart the presenter can show.
#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    TimeSeries(TimeSeriesChart),
    Bar(BarChart),
}

impl Chart {
    /// File label (file name without extension).
    pub fn label(&self) -> &str {
        match self {
            Chart::TimeSeries(c) => &c.label,
            Chart::Bar(c) => &c.label,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Chart::TimeSeries(c) => c.title(),
            Chart::Bar(c) => c.title.clone(),
        }
    }

    /// Plain-text table of the chart data.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} [{}]", self.title(), self.label());
        match self {
            Chart::TimeSeries(c) => {
                let _ = writeln!(out, "{:<7}{:>8}{:>8}{:>8}", "month", "total", "text", "media");
                for (bucket, s) in &c.points {
                    let _ = writeln!(out, "{:<7}{:>8}{:>8}{:>8}", bucket.label(), s.total, s.text, s.media);
                }
            }
            Chart::Bar(c) => {
                for bar in &c.bars {
                    let _ = match (bar.overlay, &c.overlay_name) {
                        (Some(extra), Some(name)) => writeln!(
                            out,
                            "{:<20} {} {:.0}, {} {:.0}",
                            bar.sender, c.value_name, bar.value, name, extra
                        ),
                        _ => writeln!(out, "{:<20} {} {:.2}", bar.sender, c.value_name, bar.value),
                    };
                }
            }
        }
        out
    }
}

/// Replaces characters that are awkward in file names with `_`.
pub fn file_safe(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "_".to_string()
    } else {
        cleaned
    }
}
