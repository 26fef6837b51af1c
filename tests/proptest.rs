//! Property-based tests for chatplot.
//!
//! These tests generate random chat logs to check reconstruction and
//! aggregation invariants.

use proptest::prelude::*;

use chatplot::config::ParserConfig;
use chatplot::message::MEDIA_PLACEHOLDER;
use chatplot::parser::ChatLogParser;
use chatplot::stats::{monthly_counts, partition_by_sender, sender_stats};

/// One generated message: date parts, sender, first body line, extra lines.
#[derive(Debug, Clone)]
struct GenMessage {
    month: u32,
    day: u32,
    year: u32,
    hour: u32,
    minute: u32,
    sender: String,
    first: String,
    extra: Vec<String>,
}

impl GenMessage {
    fn header(&self) -> String {
        format!(
            "{}/{}/{:02}, {}:{:02} - {}: {}\n",
            self.month, self.day, self.year, self.hour, self.minute, self.sender, self.first
        )
    }

    fn body(&self) -> String {
        let mut body = format!("{}\n", self.first);
        for line in &self.extra {
            body.push_str(line);
            body.push('\n');
        }
        body
    }

    fn render(&self) -> String {
        let mut out = self.header();
        for line in &self.extra {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Fast strategies only: pick from fixed pools instead of regex generation.
fn arb_message() -> impl Strategy<Value = GenMessage> {
    (
        1u32..=12,
        1u32..=28,
        0u32..=99,
        0u32..=23,
        0u32..=59,
        prop::sample::select(vec![
            "Alice".to_string(),
            "Bob".to_string(),
            "Иван".to_string(),
            "Unknown".to_string(),
            "Mary Jane".to_string(),
        ]),
        prop::sample::select(vec![
            "Hello".to_string(),
            "<Media omitted>".to_string(),
            "see you - later".to_string(),
            "a: b".to_string(),
            String::new(),
            "🎉🔥 emoji".to_string(),
        ]),
        prop::collection::vec(
            prop::sample::select(vec![
                "continued".to_string(),
                String::new(),
                "meet at 5 - ok".to_string(),
                "13/40/23, 10:00 - X: not a header".to_string(),
                "Привет мир".to_string(),
            ]),
            0..3,
        ),
    )
        .prop_map(
            |(month, day, year, hour, minute, sender, first, extra)| GenMessage {
                month,
                day,
                year,
                hour,
                minute,
                sender,
                first,
                extra,
            },
        )
}

fn arb_log(max_len: usize) -> impl Strategy<Value = Vec<GenMessage>> {
    prop::collection::vec(arb_message(), 0..max_len)
}

fn render(log: &[GenMessage]) -> String {
    log.iter().map(GenMessage::render).collect()
}

proptest! {
    #[test]
    fn prop_drops_exactly_the_last_message(log in arb_log(40)) {
        let messages = ChatLogParser::new().parse_str(&render(&log)).unwrap();
        prop_assert_eq!(messages.len(), log.len().saturating_sub(1));
    }

    #[test]
    fn prop_flush_keeps_every_message(log in arb_log(40)) {
        let parser = ChatLogParser::with_config(ParserConfig::new().with_flush_trailing(true));
        let messages = parser.parse_str(&render(&log)).unwrap();
        prop_assert_eq!(messages.len(), log.len());
    }

    #[test]
    fn prop_bodies_concatenate_lines(log in arb_log(40)) {
        let parser = ChatLogParser::with_config(ParserConfig::new().with_flush_trailing(true));
        let records = parser.records_from_str(&render(&log));
        for (record, generated) in records.iter().zip(&log) {
            prop_assert_eq!(&record.sender, &generated.sender);
            prop_assert_eq!(&record.body, &generated.body());
        }
    }

    #[test]
    fn prop_monthly_sorted_and_consistent(log in arb_log(60)) {
        let messages = ChatLogParser::new().parse_str(&render(&log)).unwrap();
        let months = monthly_counts(&messages);

        for pair in months.windows(2) {
            prop_assert!(pair[0].0 < pair[1].0);
        }
        for (_, stats) in &months {
            prop_assert_eq!(stats.total, stats.text + stats.media);
            prop_assert!(stats.total > 0);
        }
        let total: usize = months.iter().map(|(_, s)| s.total).sum();
        prop_assert_eq!(total, messages.len());
    }

    #[test]
    fn prop_sender_stats_match_named_messages(log in arb_log(60)) {
        let messages = ChatLogParser::new().parse_str(&render(&log)).unwrap();
        let stats = sender_stats(&messages);

        prop_assert!(!stats.contains_key("Unknown"));

        let named: Vec<_> = messages.iter().filter(|m| !m.sender.is_unknown()).collect();
        let text: usize = stats.values().map(|s| s.message_count).sum();
        let media: usize = stats.values().map(|s| s.media_count).sum();
        prop_assert_eq!(text, named.iter().filter(|m| !m.is_media()).count());
        prop_assert_eq!(media, named.iter().filter(|m| m.body == MEDIA_PLACEHOLDER).count());

        let chars: usize = stats.values().map(|s| s.char_count).sum();
        let expected: usize = named
            .iter()
            .filter(|m| !m.is_media())
            .map(|m| m.body.chars().count())
            .sum();
        prop_assert_eq!(chars, expected);
    }

    #[test]
    fn prop_monthly_text_equals_sender_text_without_unknown(log in arb_log(60)) {
        let messages = ChatLogParser::new().parse_str(&render(&log)).unwrap();
        let unknown_text = messages
            .iter()
            .filter(|m| m.sender.is_unknown() && !m.is_media())
            .count();
        let monthly_text: usize = monthly_counts(&messages).iter().map(|(_, s)| s.text).sum();
        let sender_text: usize = sender_stats(&messages).values().map(|s| s.message_count).sum();
        prop_assert_eq!(monthly_text, sender_text + unknown_text);
    }

    #[test]
    fn prop_partition_preserves_order(log in arb_log(40)) {
        let messages = ChatLogParser::new().parse_str(&render(&log)).unwrap();
        for (sender, part) in partition_by_sender(&messages) {
            let expected: Vec<_> = messages
                .iter()
                .filter(|m| m.sender.name() == Some(sender.as_str()))
                .cloned()
                .collect();
            prop_assert_eq!(part, expected);
        }
    }
}
