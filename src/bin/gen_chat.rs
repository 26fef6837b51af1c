//! Synthetic chat log generator for benchmarking and manual testing.
//!
//! Usage: cargo run --features gen-test --bin gen_chat -- [messages] [output] [senders]
//! Example: cargo run --features gen-test --bin gen_chat -- 100000 data/big.txt 5

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use rand::seq::SliceRandom;

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Иван",
    "Мария",
    "村上",
    "Mary Jane",
    "🔥FireUser🔥",
    "Charlie - the third",
];

const WORDS: &[&str] = &[
    "hello", "ok", "see", "you", "tomorrow", "lol", "dinner", "at", "eight", "where", "are",
    "running", "late", "привет", "как", "дела", "😂", "👍", "❤️", "🤔",
];

// Lines that look like headers but are not, so they continue the previous message.
const DECOYS: &[&str] = &[
    "13/45/23, 25:99 - Nobody: invalid date",
    "see you at 5 - don't be late",
    "1/2/2023, 10:00 - four digit year",
    "Re: 2/3/23, 10:00 - quoted",
];

const NOTICES: &[&str] = &[
    "Messages and calls are end-to-end encrypted.",
    "Alice changed the group description",
    "Bob left",
];

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map_or("generated_chat.txt", |s| s.as_str());
    let senders: usize = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .unwrap_or(4)
        .clamp(1, SENDERS.len());

    println!("🧪 Chat log generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!("   Senders:  {}", senders);
    println!();

    let start = Instant::now();
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);
    let bytes = generate(&mut writer, count, &SENDERS[..senders], &mut rand::thread_rng())?;
    writer.flush()?;

    let elapsed = start.elapsed();
    println!("✅ Done!");
    println!("   Size: {:.2} MB", bytes as f64 / 1_000_000.0);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    Ok(())
}

/// Writes `count` messages and returns the number of bytes written.
fn generate<W: Write, R: Rng>(out: &mut W, count: usize, senders: &[&str], rng: &mut R) -> io::Result<usize> {
    let mut timestamp = NaiveDate::from_ymd_opt(2021, 1, 1)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap_or_default();
    let mut bytes = 0;

    for i in 0..count {
        timestamp += Duration::minutes(rng.gen_range(1..=720));
        let date = header_date(timestamp);

        let mut chunk = if i % 997 == 0 {
            // A system notice has no sender separator.
            let notice = NOTICES.choose(rng).copied().unwrap_or_default();
            format!("{date} - {notice}\n")
        } else {
            let sender = senders.choose(rng).copied().unwrap_or("Alice");
            let body = if rng.gen_ratio(1, 12) {
                "<Media omitted>".to_string()
            } else {
                sentence(rng)
            };
            format!("{date} - {sender}: {body}\n")
        };

        for _ in 0..rng.gen_range(0..3u8).saturating_sub(1) {
            chunk.push_str(&sentence(rng));
            chunk.push('\n');
        }
        if i % 500 == 250 {
            chunk.push_str(DECOYS.choose(rng).copied().unwrap_or_default());
            chunk.push('\n');
        }

        out.write_all(chunk.as_bytes())?;
        bytes += chunk.len();

        if (i + 1) % 10_000 == 0 {
            eprint!("\r   Generated {}/{}", i + 1, count);
        }
    }
    if count >= 10_000 {
        eprintln!();
    }
    Ok(bytes)
}

/// `M/D/YY, H:MM`
fn header_date(ts: NaiveDateTime) -> String {
    ts.format("%-m/%-d/%y, %-H:%M").to_string()
}

fn sentence<R: Rng>(rng: &mut R) -> String {
    let len = rng.gen_range(1..=12);
    (0..len)
        .filter_map(|_| WORDS.choose(rng).copied())
        .collect::<Vec<_>>()
        .join(" ")
}
