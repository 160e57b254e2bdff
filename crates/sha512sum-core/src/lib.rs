pub mod config;
pub mod logging;

pub mod digest;
pub mod source;
pub mod verify;

pub use digest::{compute_digest, DigestEngine, DigestError, DigestResult, HexDigest};
pub use source::Source;
pub use verify::{verify, ChecksumRecord, VerificationTally, Verifier, VerifyError};
