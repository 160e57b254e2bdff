//! Raw digest bytes and their fixed-width hex rendering.

use std::fmt;

use super::DIGEST_LEN;

/// Rendered digest length: two lowercase hex characters per byte.
pub const HEX_LEN: usize = DIGEST_LEN * 2;

/// The 64 raw bytes of a SHA-512 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigestResult([u8; DIGEST_LEN]);

impl DigestResult {
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Render as 128 lowercase hex characters.
    pub fn to_hex(&self) -> HexDigest {
        let mut buf = [0u8; HEX_LEN];
        hex::encode_to_slice(self.0, &mut buf)
            .expect("hex buffer is exactly twice the digest length");
        HexDigest(buf)
    }
}

impl fmt::Display for DigestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_hex().as_str())
    }
}

impl fmt::Debug for DigestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigestResult({})", self.to_hex().as_str())
    }
}

/// Stack-held hex rendering of a [`DigestResult`]. Always exactly
/// [`HEX_LEN`] ASCII characters from `[0-9a-f]`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HexDigest([u8; HEX_LEN]);

impl HexDigest {
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).expect("hex digits are ASCII")
    }

    pub fn as_bytes(&self) -> &[u8; HEX_LEN] {
        &self.0
    }

    /// Exact, case-sensitive comparison against an expected digest, taken
    /// as raw bytes from a checksum-list line.
    pub fn matches(&self, expected: &[u8]) -> bool {
        self.0.as_slice() == expected
    }
}

impl fmt::Display for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexDigest({})", self.as_str())
    }
}
