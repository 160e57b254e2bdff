//! Check mode: verify each input as a checksum-list document.

use anyhow::Result;
use sha512sum_core::{Source, Verifier};
use std::ffi::OsString;
use std::io::Write;

use crate::cli::RunStatus;

/// Verify each checksum list in order. A malformed list is reported on `err`
/// and abandoned; the remaining lists are still checked. A list that cannot
/// be opened, or a target that cannot be digested, ends the run.
pub fn run_check<W: Write, E: Write>(
    verifier: &Verifier,
    inputs: &[OsString],
    out: &mut W,
    err: &mut E,
) -> Result<RunStatus> {
    let mut status = RunStatus::Success;
    for arg in inputs {
        let list = Source::parse(arg);
        let outcome = match verifier.verify(&list, out) {
            Ok(tally) if tally.passed() => RunStatus::Success,
            Ok(_) => RunStatus::Failure,
            Err(e) if e.is_format_error() => {
                writeln!(err, "sha512sum: {e}")?;
                RunStatus::Failure
            }
            Err(e) => return Err(e.into()),
        };
        status = status.and(outcome);
    }
    Ok(status)
}
