//! Chat log parsing building blocks.
//!
//! - [`classify`] - decides whether a line starts a message
//! - [`reconstruct`] - folds lines into [`RawRecord`]s
//! - [`date`] - turns date prefixes into timestamps
//!
//! Most callers want [`ChatLogParser`](crate::parser::ChatLogParser), which
//! runs all three.

pub mod classify;
pub mod date;
pub mod reconstruct;

pub use classify::{
    DATE_SEPARATOR, Header, LineKind, SENDER_SEPARATOR, classify_line, is_date_prefix,
};
pub use date::normalize_date;
pub use reconstruct::{
    Reconstruction, Reconstructor, lines_with_endings, reconstruct, reconstruct_with,
};

use crate::error::Result;
use crate::message::{DatedMessage, RawRecord, Sender};

/// Normalizes one record's date and sender.
pub fn normalize_record(record: RawRecord) -> Result<DatedMessage> {
    let timestamp = normalize_date(&record.date)?;
    Ok(DatedMessage::new(
        timestamp,
        Sender::from_label(&record.sender),
        record.body,
    ))
}

/// Normalizes every record, stopping at the first bad date.
pub fn normalize_records(records: Vec<RawRecord>) -> Result<Vec<DatedMessage>> {
    records.into_iter().map(normalize_record).collect()
}
