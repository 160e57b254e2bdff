//! Streaming SHA-512 digest computation.
//!
//! Input is read in bounded chunks and fed to an incremental hash, so memory
//! use does not depend on input size.

mod engine;
mod error;
mod hash;
mod result;

pub use engine::{
    compute_digest, digest_reader, format_digest_line, DigestEngine, DEFAULT_BUFFER_BYTES,
};
pub use error::DigestError;
pub use hash::{IncrementalHash, Sha512Hash, DIGEST_LEN};
pub use result::{DigestResult, HexDigest, HEX_LEN};
