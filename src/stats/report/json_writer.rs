//! JSON report writer.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;

use super::ChatSummary;

/// Serializes the summary as pretty-printed JSON.
///
/// # Format
/// ```json
/// {
///   "chat_name": "friends",
///   "messages": 2,
///   "months": [{"month": "01/23", "total": 2, "text": 1, "media": 1}],
///   "senders": [{"sender": "Alice", "message_count": 1, "char_count": 6,
///                "media_count": 0, "average_length": 6.0}]
/// }
/// ```
pub fn to_json(summary: &ChatSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Writes `summary.json` into `dir`.
pub fn write_json(summary: &ChatSummary, dir: &Path) -> Result<PathBuf> {
    let path = dir.join("summary.json");
    fs::write(&path, to_json(summary)?)?;
    info!(path = %path.display(), "wrote summary report");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::super::tests::sample_summary;
    use super::*;

    #[test]
    fn test_to_json_round_trip() {
        let summary = sample_summary();
        let json = to_json(&summary).unwrap();
        assert!(json.contains("\"chat_name\": \"friends\""));
        assert!(json.contains("\"average_length\": null"));

        let parsed: ChatSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, summary);
    }

    #[test]
    fn test_write_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_json(&sample_summary(), dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "summary.json");
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["senders"][0]["sender"], "Alice");
    }
}
