//! Chat log parser entry point.
//!
//! # Example
//!
//! ```rust
//! use chatplot::parser::ChatLogParser;
//!
//! let log = "\
//! 1/2/23, 14:05 - Alice: Hello
//! 1/2/23, 14:07 - Bob: Hi there
//! 1/2/23, 14:08 - Alice: bye
//! ";
//!
//! let messages = ChatLogParser::new().parse_str(log)?;
//! assert_eq!(messages.len(), 2);
//! # Ok::<(), chatplot::ChatplotError>(())
//! ```

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::ParserConfig;
use crate::error::Result;
use crate::message::{DatedMessage, RawRecord};
use crate::parsing::{lines_with_endings, normalize_records, reconstruct_with};

/// Parser for exported chat logs.
///
/// Lines are read whole, folded into records, and each record's date prefix
/// is normalized. A date prefix that passes the header pattern but is not a
/// real calendar date aborts the parse.
#[derive(Debug, Clone, Default)]
pub struct ChatLogParser {
    config: ParserConfig,
}

impl ChatLogParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses a chat log file.
    pub fn parse(&self, path: &Path) -> Result<Vec<DatedMessage>> {
        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = content.len(), "read chat log");
        self.parse_str(&content)
    }

    /// Parses chat log content held in memory.
    pub fn parse_str(&self, content: &str) -> Result<Vec<DatedMessage>> {
        normalize_records(self.records_from_str(content))
    }

    /// Runs only the line folding step, leaving dates as written.
    pub fn records_from_str(&self, content: &str) -> Vec<RawRecord> {
        let content = normalize_newlines(content);
        let result = reconstruct_with(lines_with_endings(&content), self.config.flush_trailing);

        if let Some(last) = &result.unflushed {
            debug!(date = %last.date, sender = %last.sender, "last message left unflushed");
        }
        debug!(records = result.records.len(), "reconstructed records");

        result.records
    }
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Sender;
    use std::io::Write;

    const LOG: &str = "1/2/23, 14:05 - Alice: Hello\n\
                       1/2/23, 14:07 - Bob: Hi there\n\
                       1/2/23, 14:08 - Alice: bye\n";

    #[test]
    fn test_parse_str_drops_last() {
        let messages = ChatLogParser::new().parse_str(LOG).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::Named("Alice".into()));
        assert_eq!(messages[1].body, "Hi there\n");
    }

    #[test]
    fn test_parse_str_flush_trailing() {
        let parser = ChatLogParser::with_config(ParserConfig::new().with_flush_trailing(true));
        let messages = parser.parse_str(LOG).unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].body, "bye\n");
    }

    #[test]
    fn test_crlf_normalized() {
        let log = LOG.replace('\n', "\r\n");
        let records = ChatLogParser::new().records_from_str(&log);
        assert_eq!(records[0].body, "Hello\n");
        assert_eq!(records[1].body, "Hi there\n");
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LOG.as_bytes()).unwrap();
        let messages = ChatLogParser::new().parse(file.path()).unwrap();
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn test_parse_missing_file() {
        let err = ChatLogParser::new()
            .parse(Path::new("/definitely/not/here.txt"))
            .unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_bad_date_is_fatal() {
        let log = "2/30/23, 14:05 - Alice: Hello\n1/2/23, 14:07 - Bob: Hi\n";
        assert!(ChatLogParser::new().parse_str(log).unwrap_err().is_invalid_date());
    }
}
