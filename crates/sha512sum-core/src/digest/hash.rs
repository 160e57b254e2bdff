//! Incremental hash primitive.

use sha2::{Digest, Sha512};

use super::DigestError;

/// Raw digest length in bytes.
pub const DIGEST_LEN: usize = 64;

/// Incremental hash context: `init`, any number of `update`s, one `finalize`.
///
/// Any conforming 512-bit implementation can be substituted for [`Sha512Hash`].
pub trait IncrementalHash: Sized {
    fn init() -> Result<Self, DigestError>;

    /// Feed the next chunk. Chunks must be supplied in stream order.
    fn update(&mut self, bytes: &[u8]) -> Result<(), DigestError>;

    fn finalize(self) -> Result<[u8; DIGEST_LEN], DigestError>;
}

/// SHA-512 backed by the `sha2` crate.
#[derive(Clone, Default)]
pub struct Sha512Hash(Sha512);

impl IncrementalHash for Sha512Hash {
    fn init() -> Result<Self, DigestError> {
        Ok(Self(Sha512::new()))
    }

    fn update(&mut self, bytes: &[u8]) -> Result<(), DigestError> {
        Digest::update(&mut self.0, bytes);
        Ok(())
    }

    fn finalize(self) -> Result<[u8; DIGEST_LEN], DigestError> {
        let out = self.0.finalize();
        if out.len() != DIGEST_LEN {
            return Err(DigestError::HashFinalizeFailed);
        }
        let mut digest = [0u8; DIGEST_LEN];
        digest.copy_from_slice(&out);
        Ok(digest)
    }
}
