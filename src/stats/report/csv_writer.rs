//! CSV report writer.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;

use super::ChatSummary;

fn writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Monthly counts as CSV.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Month`, `Total`, `Text`, `Media`
pub fn to_monthly_csv(summary: &ChatSummary) -> Result<String> {
    let mut wtr = writer();
    wtr.write_record(["Month", "Total", "Text", "Media"])?;
    for row in &summary.months {
        wtr.write_record([
            row.month.clone(),
            row.total.to_string(),
            row.text.to_string(),
            row.media.to_string(),
        ])?;
    }
    finish(wtr)
}

/// Per-sender statistics as CSV.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Sender`, `Messages`, `Characters`, `Media`, `AverageLength`
/// - `AverageLength` is empty for senders without text messages
pub fn to_senders_csv(summary: &ChatSummary) -> Result<String> {
    let mut wtr = writer();
    wtr.write_record(["Sender", "Messages", "Characters", "Media", "AverageLength"])?;
    for row in &summary.senders {
        wtr.write_record([
            row.sender.clone(),
            row.message_count.to_string(),
            row.char_count.to_string(),
            row.media_count.to_string(),
            row.average_length
                .map(|avg| format!("{avg:.2}"))
                .unwrap_or_default(),
        ])?;
    }
    finish(wtr)
}

/// Writes `monthly.csv` and `senders.csv` into `dir`.
pub fn write_csv(summary: &ChatSummary, dir: &Path) -> Result<Vec<PathBuf>> {
    let monthly = dir.join("monthly.csv");
    fs::write(&monthly, to_monthly_csv(summary)?)?;
    info!(path = %monthly.display(), "wrote monthly report");

    let senders = dir.join("senders.csv");
    fs::write(&senders, to_senders_csv(summary)?)?;
    info!(path = %senders.display(), "wrote sender report");

    Ok(vec![monthly, senders])
}
