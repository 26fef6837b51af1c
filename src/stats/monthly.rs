//! Calendar-month message counts.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::message::DatedMessage;

use super::partition_by_sender;

/// Grouping key for a calendar month: the first day of that month.
///
/// Ordering is chronological. Displays as `MM/YY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthBucket(NaiveDate);

impl MonthBucket {
    /// Bucket containing `timestamp`.
    pub fn of(timestamp: NaiveDateTime) -> Self {
        let date = timestamp.date();
        Self(date - Days::new(u64::from(date.day0())))
    }

    /// Bucket for `year`/`month`, or `None` if the month is out of range.
    pub fn from_ym(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    /// First day of the month at midnight.
    pub fn start(&self) -> NaiveDateTime {
        self.0.and_time(chrono::NaiveTime::MIN)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Axis label, `MM/YY`.
    pub fn label(&self) -> String {
        self.0.format("%m/%y").to_string()
    }
}

impl fmt::Display for MonthBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%m/%y"))
    }
}

/// Message counts for one month. `total == text + media`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthStats {
    pub total: usize,
    pub text: usize,
    pub media: usize,
}

impl MonthStats {
    /// Counts one message.
    pub fn record(&mut self, is_media: bool) {
        self.total += 1;
        if is_media {
            self.media += 1;
        } else {
            self.text += 1;
        }
    }
}

/// Counts messages per calendar month, oldest month first.
///
/// # Example
///
/// ```
/// use chatplot::parser::ChatLogParser;
/// use chatplot::stats::monthly_counts;
///
/// let log = "\
/// 1/2/23, 14:05 - Alice: Hello
/// 1/9/23, 10:00 - Bob: <Media omitted>
/// 2/1/23, 09:00 - Alice: February
/// 2/2/23, 09:00 - Bob: dropped
/// ";
/// let messages = ChatLogParser::new().parse_str(log)?;
/// let months = monthly_counts(&messages);
///
/// assert_eq!(months.len(), 2);
/// assert_eq!(months[0].0.to_string(), "01/23");
/// assert_eq!((months[0].1.text, months[0].1.media), (1, 1));
/// # Ok::<(), chatplot::ChatplotError>(())
/// ```
pub fn monthly_counts(messages: &[DatedMessage]) -> Vec<(MonthBucket, MonthStats)> {
    let mut buckets: BTreeMap<MonthBucket, MonthStats> = BTreeMap::new();
    for msg in messages {
        buckets
            .entry(MonthBucket::of(msg.timestamp))
            .or_default()
            .record(msg.is_media());
    }
    buckets.into_iter().collect()
}

/// Monthly counts for each named sender.
///
/// Messages from [`Sender::Unknown`](crate::message::Sender::Unknown) are
/// left out.
pub fn monthly_counts_by_sender(
    messages: &[DatedMessage],
) -> BTreeMap<String, Vec<(MonthBucket, MonthStats)>> {
    partition_by_sender(messages)
        .into_iter()
        .map(|(sender, own)| (sender, monthly_counts(&own)))
        .collect()
}
