//! Checksum-list verification.
//!
//! A checksum-list document has one `<hex digest>  <path>` record per line,
//! the same format digest mode prints. Each referenced file is re-digested
//! and compared; one `OK`/`FAILED` line is emitted per record, then a
//! summary line.

mod error;
mod record;
mod run;
mod tally;

pub use error::VerifyError;
pub use record::{ChecksumRecord, RecordStatus, SEPARATOR};
pub use run::{verify, Verifier};
pub use tally::VerificationTally;
