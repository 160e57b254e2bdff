//! Verification loop: parse, digest, compare, emit, summarize.

use std::io::{self, BufRead, BufReader, Write};

use super::{ChecksumRecord, RecordStatus, VerificationTally, VerifyError};
use crate::digest::DigestEngine;
use crate::source::Source;

/// Verifies checksum-list documents using a [`DigestEngine`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Verifier {
    engine: DigestEngine,
}

impl Verifier {
    pub fn new(engine: DigestEngine) -> Self {
        Self { engine }
    }

    /// Verify every record of the checksum-list document at `list`,
    /// writing one line per record and a summary line to `out`.
    pub fn verify<W: Write>(
        &self,
        list: &Source,
        out: &mut W,
    ) -> Result<VerificationTally, VerifyError> {
        let name = list.diagnostic_name();
        let reader = list.open().map_err(|e| VerifyError::OpenFailed {
            name: name.clone(),
            source: e,
        })?;
        tracing::debug!(list = %name, "verifying checksum list");
        self.verify_reader(BufReader::new(reader), &name, out)
    }

    /// Same as [`Verifier::verify`] over an already open document. `name`
    /// labels diagnostics.
    ///
    /// Lines are split on `\n` and handled as raw bytes, so paths need not
    /// be UTF-8. Stops at the first malformed line or at the first target
    /// that cannot be digested; in both cases no summary line is written.
    pub fn verify_reader<R: BufRead, W: Write>(
        &self,
        reader: R,
        name: &str,
        out: &mut W,
    ) -> Result<VerificationTally, VerifyError> {
        let mut tally = VerificationTally::new();

        for (idx, line) in reader.split(b'\n').enumerate() {
            let line = line.map_err(|e| VerifyError::ReadFailed {
                name: name.to_string(),
                source: e,
            })?;
            let record =
                ChecksumRecord::parse(&line).ok_or_else(|| VerifyError::MissingSeparator {
                    name: name.to_string(),
                    line: idx + 1,
                })?;

            let status = self.check(&record)?;
            tally.record(status == RecordStatus::Ok);
            write_report_line(out, record.target_path, status).map_err(VerifyError::Output)?;
        }

        writeln!(out, "{}", tally.summary_line()).map_err(VerifyError::Output)?;
        tracing::info!(
            list = name,
            total = tally.total,
            failed = tally.failed,
            "checksum list verified"
        );
        Ok(tally)
    }

    /// Digest the record's target and compare with the expected digest.
    pub fn check(&self, record: &ChecksumRecord<'_>) -> Result<RecordStatus, VerifyError> {
        let target = record.target();
        let actual = self.engine.compute(&target)?;
        let status = RecordStatus::from_match(actual.to_hex().matches(record.expected_digest));
        if status == RecordStatus::Failed {
            tracing::warn!(path = %target, "checksum mismatch");
        } else {
            tracing::debug!(path = %target, "checksum ok");
        }
        Ok(status)
    }
}

/// `<path>: OK` or `<path>: FAILED`, path bytes copied verbatim.
fn write_report_line<W: Write>(
    out: &mut W,
    path: &[u8],
    status: RecordStatus,
) -> io::Result<()> {
    out.write_all(path)?;
    writeln!(out, ": {status}")
}

/// Verify a checksum-list document with the default engine.
pub fn verify<W: Write>(list: &Source, out: &mut W) -> Result<VerificationTally, VerifyError> {
    Verifier::default().verify(list, out)
}
