//! Chunked read loop feeding an [`IncrementalHash`].

use std::ffi::OsStr;
use std::io::{self, Read};

use super::{DigestError, DigestResult, IncrementalHash, Sha512Hash, HEX_LEN};
use crate::source::{os_str_bytes, Source};

/// Default read chunk size.
pub const DEFAULT_BUFFER_BYTES: usize = 8 * 1024;

/// Computes digests of [`Source`]s with a fixed read chunk size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestEngine {
    buffer_bytes: usize,
}

impl Default for DigestEngine {
    fn default() -> Self {
        Self {
            buffer_bytes: DEFAULT_BUFFER_BYTES,
        }
    }
}

impl DigestEngine {
    /// Engine reading `buffer_bytes` at a time (at least one byte).
    pub fn new(buffer_bytes: usize) -> Self {
        Self {
            buffer_bytes: buffer_bytes.max(1),
        }
    }

    pub fn buffer_bytes(&self) -> usize {
        self.buffer_bytes
    }

    /// SHA-512 of the source.
    pub fn compute(&self, source: &Source) -> Result<DigestResult, DigestError> {
        self.compute_with::<Sha512Hash>(source)
    }

    /// Digest of the source with any conforming hash implementation.
    pub fn compute_with<H: IncrementalHash>(
        &self,
        source: &Source,
    ) -> Result<DigestResult, DigestError> {
        let name = source.display_name();
        let reader = source.open().map_err(|e| DigestError::OpenFailed {
            path: name.clone(),
            source: e,
        })?;
        tracing::debug!(source = %name, "opened source for digest");
        digest_reader::<H, _>(reader, &name, self.buffer_bytes)
    }
}

/// SHA-512 of the source with the default chunk size.
pub fn compute_digest(source: &Source) -> Result<DigestResult, DigestError> {
    DigestEngine::default().compute(source)
}

/// Stream `reader` to end-of-input through `H`, `buffer_bytes` at a time.
///
/// `path` only labels errors and log events. Chunks are hashed in the order
/// they are read; an interrupted read is re-issued, any other read error is
/// returned as [`DigestError::ReadFailed`].
pub fn digest_reader<H: IncrementalHash, R: Read>(
    mut reader: R,
    path: &str,
    buffer_bytes: usize,
) -> Result<DigestResult, DigestError> {
    let buffer_bytes = buffer_bytes.max(1);
    let mut buf = Vec::new();
    buf.try_reserve_exact(buffer_bytes)
        .map_err(|_| DigestError::AllocFailed)?;
    buf.resize(buffer_bytes, 0);

    let mut hash = H::init()?;
    let mut total: u64 = 0;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(DigestError::ReadFailed {
                    path: path.to_string(),
                    source: e,
                })
            }
        };
        hash.update(&buf[..n])?;
        total += n as u64;
    }

    let digest = hash.finalize()?;
    tracing::debug!(source = path, bytes = total, "digest computed");
    Ok(DigestResult::from_bytes(digest))
}

/// One digest-mode output line (without newline): `<hex>  <path>`, with
/// the path bytes copied verbatim.
pub fn format_digest_line(digest: &DigestResult, path: &OsStr) -> Vec<u8> {
    let path = os_str_bytes(path);
    let mut line = Vec::with_capacity(HEX_LEN + 2 + path.len());
    line.extend_from_slice(digest.to_hex().as_bytes());
    line.extend_from_slice(b"  ");
    line.extend_from_slice(&path);
    line
}
