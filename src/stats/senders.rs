//! Per-sender statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::message::DatedMessage;

/// Activity of one sender.
///
/// `message_count` and `char_count` cover text messages only; media
/// messages are counted separately in `media_count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderStats {
    pub message_count: usize,
    pub char_count: usize,
    pub media_count: usize,
}

impl SenderStats {
    /// Counts one message.
    pub fn record(&mut self, msg: &DatedMessage) {
        if msg.is_media() {
            self.media_count += 1;
        } else {
            self.message_count += 1;
            self.char_count += msg.char_len();
        }
    }

    /// Mean text message length in characters.
    ///
    /// `None` when the sender has no text messages.
    pub fn average_length(&self) -> Option<f64> {
        (self.message_count > 0).then(|| self.char_count as f64 / self.message_count as f64)
    }
}

/// Accumulates [`SenderStats`] for every named sender.
///
/// # Example
///
/// ```
/// use chatplot::parser::ChatLogParser;
/// use chatplot::stats::sender_stats;
///
/// let log = "\
/// 1/2/23, 14:05 - Alice: Hello
/// 1/2/23, 14:06 - Alice: <Media omitted>
/// 1/2/23, 14:07 - Bob: Hi
/// 1/2/23, 14:08 - Bob: dropped
/// ";
/// let messages = ChatLogParser::new().parse_str(log)?;
/// let stats = sender_stats(&messages);
///
/// assert_eq!(stats["Alice"].message_count, 1);
/// assert_eq!(stats["Alice"].char_count, 6);
/// assert_eq!(stats["Alice"].media_count, 1);
/// # Ok::<(), chatplot::ChatplotError>(())
/// ```
pub fn sender_stats(messages: &[DatedMessage]) -> BTreeMap<String, SenderStats> {
    let mut stats: BTreeMap<String, SenderStats> = BTreeMap::new();
    for msg in messages {
        if let Some(name) = msg.sender.name() {
            stats.entry(name.to_string()).or_default().record(msg);
        }
    }
    stats
}

/// Splits messages into one list per named sender, keeping input order
/// within each list.
pub fn partition_by_sender(messages: &[DatedMessage]) -> BTreeMap<String, Vec<DatedMessage>> {
    let mut parts: BTreeMap<String, Vec<DatedMessage>> = BTreeMap::new();
    for msg in messages {
        if let Some(name) = msg.sender.name() {
            parts.entry(name.to_string()).or_default().push(msg.clone());
        }
    }
    parts
}
