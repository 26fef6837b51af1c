//! Folds a flat line stream into whole messages.
//!
//! The [`Reconstructor`] keeps the record in progress and the records
//! already closed. A header closes the open record and opens a new one; any
//! other line is appended verbatim to the open body.
//!
//! The record still open when input runs out is **not** emitted unless
//! `flush_trailing` is requested. Existing reports built from these logs
//! depend on that count, so it stays the default.

use tracing::debug;

use crate::message::RawRecord;

use super::classify::{LineKind, classify_line};

/// Splits content into lines, keeping each line's `\n`.
pub fn lines_with_endings(content: &str) -> impl Iterator<Item = &str> {
    content.split_inclusive('\n')
}

/// Result of a reconstruction pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconstruction {
    /// Closed records in input order.
    pub records: Vec<RawRecord>,
    /// The record that was still open at end of input, if it was not flushed.
    pub unflushed: Option<RawRecord>,
    /// Lines seen before the first header; they have nothing to attach to.
    pub orphan_lines: usize,
}

/// Line-by-line message reconstruction state.
#[derive(Debug, Default)]
pub struct Reconstructor {
    current: Option<RawRecord>,
    records: Vec<RawRecord>,
    orphan_lines: usize,
}

impl Reconstructor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one raw line (with its line ending).
    pub fn push_line(&mut self, line: &str) {
        match classify_line(line) {
            LineKind::Header(header) => {
                let next = RawRecord::new(header.date, header.sender, header.body);
                if let Some(done) = self.current.replace(next) {
                    self.records.push(done);
                }
            }
            LineKind::Continuation => match self.current.as_mut() {
                Some(open) => open.body.push_str(line),
                None => self.orphan_lines += 1,
            },
        }
    }

    /// Number of records closed so far.
    pub fn closed(&self) -> usize {
        self.records.len()
    }

    /// Ends the pass.
    ///
    /// With `flush_trailing == false` the open record is returned in
    /// [`Reconstruction::unflushed`] instead of [`Reconstruction::records`].
    pub fn finish(mut self, flush_trailing: bool) -> Reconstruction {
        let unflushed = if flush_trailing {
            if let Some(last) = self.current.take() {
                self.records.push(last);
            }
            None
        } else {
            self.current.take()
        };

        if self.orphan_lines > 0 {
            debug!(lines = self.orphan_lines, "dropped lines before first header");
        }

        Reconstruction {
            records: self.records,
            unflushed,
            orphan_lines: self.orphan_lines,
        }
    }
}

/// Reconstructs records from lines, leaving the last open record unflushed.
///
/// # Example
///
/// ```
/// use chatplot::parsing::reconstruct;
///
/// let records = reconstruct([
///     "1/2/23, 14:05 - Alice: Hello\n",
///     "1/2/23, 14:07 - Bob: Hi there\n",
///     "1/2/23, 14:08 - Alice: bye\n",
/// ]);
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].sender, "Bob");
/// ```
pub fn reconstruct<'a, I>(lines: I) -> Vec<RawRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    reconstruct_with(lines, false).records
}

/// Reconstructs records from lines with explicit trailing-record handling.
pub fn reconstruct_with<'a, I>(lines: I, flush_trailing: bool) -> Reconstruction
where
    I: IntoIterator<Item = &'a str>,
{
    let mut state = Reconstructor::new();
    for line in lines {
        state.push_line(line);
    }
    state.finish(flush_trailing)
}
