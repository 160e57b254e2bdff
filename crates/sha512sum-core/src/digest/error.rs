//! Digest error taxonomy.

use std::io;
use thiserror::Error;

/// Failure while computing a digest.
///
/// Only [`DigestError::OpenFailed`] is recoverable: the caller may report it
/// and move on to the next input. Everything else ends the process.
#[derive(Debug, Error)]
pub enum DigestError {
    /// The source could not be opened.
    #[error("{path}")]
    OpenFailed {
        path: String,
        #[source]
        source: io::Error,
    },
    /// A read from an already opened source failed mid-stream.
    #[error("{path}")]
    ReadFailed {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("could not initialize digest context")]
    HashInitFailed,
    #[error("could not update digest")]
    HashUpdateFailed,
    #[error("could not finalize digest")]
    HashFinalizeFailed,
    #[error("could not allocate digest buffer")]
    AllocFailed,
}

impl DigestError {
    /// True when processing may continue with the next input.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DigestError::OpenFailed { .. })
    }

    /// Path the error is attributed to, if any. Internal hash failures are
    /// never attributed to user input.
    pub fn path(&self) -> Option<&str> {
        match self {
            DigestError::OpenFailed { path, .. } | DigestError::ReadFailed { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }
}
