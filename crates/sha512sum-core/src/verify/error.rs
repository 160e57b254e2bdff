//! Verification error taxonomy.

use std::io;
use thiserror::Error;

use crate::digest::DigestError;

/// Failure that ends verification of a checksum-list document.
///
/// A digest mismatch is not an error; it is counted in the tally.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The checksum-list document could not be opened.
    #[error("{name}")]
    OpenFailed {
        name: String,
        #[source]
        source: io::Error,
    },
    /// Reading a line of the checksum-list document failed.
    #[error("{name}")]
    ReadFailed {
        name: String,
        #[source]
        source: io::Error,
    },
    /// A line lacks the two-space separator; the whole document is rejected.
    #[error("invalid checksum file syntax: {name}")]
    MissingSeparator { name: String, line: usize },
    /// A referenced file could not be digested.
    #[error(transparent)]
    Target(#[from] DigestError),
    #[error("write verification output")]
    Output(#[source] io::Error),
}

impl VerifyError {
    /// True when only the current document is abandoned and other
    /// documents may still be checked.
    pub fn is_format_error(&self) -> bool {
        matches!(self, VerifyError::MissingSeparator { .. })
    }
}
