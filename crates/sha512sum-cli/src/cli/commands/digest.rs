//! Digest mode: print `<sha512>  <path>` for each input.

use anyhow::Result;
use sha512sum_core::digest::format_digest_line;
use sha512sum_core::{DigestEngine, Source};
use std::ffi::OsString;
use std::io::Write;

use crate::cli::RunStatus;

/// Digest each input in order. An input that cannot be opened is reported
/// on `err` and skipped; any other failure ends the run.
pub fn run_digest<W: Write, E: Write>(
    engine: &DigestEngine,
    inputs: &[OsString],
    out: &mut W,
    err: &mut E,
) -> Result<RunStatus> {
    let mut status = RunStatus::Success;
    for arg in inputs {
        match engine.compute(&Source::parse(arg)) {
            Ok(digest) => {
                out.write_all(&format_digest_line(&digest, arg))?;
                out.write_all(b"\n")?;
            }
            Err(e) if e.is_recoverable() => {
                tracing::warn!(path = %arg.to_string_lossy(), "skipping unreadable input");
                writeln!(err, "sha512sum: {:#}", anyhow::Error::new(e))?;
                status = RunStatus::Failure;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(status)
}
