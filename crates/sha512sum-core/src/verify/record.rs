//! One line of a checksum-list document.

use std::fmt;

use crate::source::Source;

/// Separator between digest and path.
pub const SEPARATOR: &[u8] = b"  ";

/// A parsed `<expected digest>  <path>` line, borrowing the raw line bytes.
/// Neither half has to be UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumRecord<'a> {
    /// Bytes before the first two-space run, kept verbatim.
    pub expected_digest: &'a [u8],
    /// Bytes after it, without the line terminator.
    pub target_path: &'a [u8],
}

impl<'a> ChecksumRecord<'a> {
    /// Split at the first two-space run. Returns `None` when there is none,
    /// which includes lines with a single space and empty lines.
    pub fn parse(line: &'a [u8]) -> Option<Self> {
        let line = line
            .strip_suffix(b"\n")
            .map(|l| l.strip_suffix(b"\r").unwrap_or(l))
            .unwrap_or(line);
        let at = line
            .windows(SEPARATOR.len())
            .position(|w| w == SEPARATOR)?;
        Some(Self {
            expected_digest: &line[..at],
            target_path: &line[at + SEPARATOR.len()..],
        })
    }

    /// The file this record refers to.
    pub fn target(&self) -> Source {
        Source::from_bytes(self.target_path)
    }
}

/// Outcome of comparing one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    Ok,
    Failed,
}

impl RecordStatus {
    pub fn from_match(matched: bool) -> Self {
        if matched {
            RecordStatus::Ok
        } else {
            RecordStatus::Failed
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordStatus::Ok => f.write_str("OK"),
            RecordStatus::Failed => f.write_str("FAILED"),
        }
    }
}
