//! Running pass/fail counters for one checksum-list document.

/// Records processed and records whose digest did not match.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VerificationTally {
    pub total: u64,
    pub failed: u64,
}

impl VerificationTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, matched: bool) {
        self.total += 1;
        if !matched {
            self.failed += 1;
        }
    }

    /// Verdict of the run: every record matched.
    pub fn passed(&self) -> bool {
        self.failed == 0
    }

    /// Summary line, printed even when nothing failed.
    pub fn summary_line(&self) -> String {
        format!(
            "WARNING: {} of {} computed checksums did NOT match",
            self.failed, self.total
        )
    }
}
