//! Aggregation over parsed messages.
//!
//! - [`monthly`] - month buckets with total/text/media counts
//! - [`senders`] - per-sender message, character and media counts
//! - [`filter`] - date range and sender filters applied before aggregation
//! - [`report`] - CSV and JSON statistics reports
//!
//! Every aggregate is a pure reduction over a `&[DatedMessage]`.

pub mod filter;
pub mod monthly;
pub mod report;
pub mod senders;

pub use filter::{FilterConfig, apply_filters};
pub use monthly::{MonthBucket, MonthStats, monthly_counts, monthly_counts_by_sender};
pub use senders::{SenderStats, partition_by_sender, sender_stats};
