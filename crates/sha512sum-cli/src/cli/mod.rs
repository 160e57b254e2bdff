//! CLI for sha512sum: print or check SHA-512 checksums.

mod commands;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use sha512sum_core::config;
use sha512sum_core::source::STDIN_SENTINEL;
use sha512sum_core::Verifier;
use std::ffi::OsString;
use std::io::{self, Write};

use commands::{run_check, run_digest};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "sha512sum")]
#[command(about = "Print or check SHA512 checksums", long_about = None)]
#[command(after_help = "With no FILE, or when FILE is -, read standard input.")]
pub struct Cli {
    /// Read checksums from the FILEs and verify them.
    #[arg(short, long)]
    pub check: bool,

    /// Files to digest, or checksum lists with --check.
    #[arg(value_name = "FILE", value_parser = clap::value_parser!(OsString))]
    pub files: Vec<OsString>,
}

/// Overall result of an invocation, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Failure,
}

impl RunStatus {
    pub fn code(self) -> i32 {
        match self {
            RunStatus::Success => 0,
            RunStatus::Failure => 1,
        }
    }

    /// Failure is sticky: once any input failed, the run failed.
    pub fn and(self, other: RunStatus) -> RunStatus {
        if self == RunStatus::Failure || other == RunStatus::Failure {
            RunStatus::Failure
        } else {
            RunStatus::Success
        }
    }
}

impl Cli {
    /// Inputs in the order given; standard input when none.
    pub fn inputs(&self) -> Vec<OsString> {
        if self.files.is_empty() {
            vec![OsString::from(STDIN_SENTINEL)]
        } else {
            self.files.clone()
        }
    }

    pub fn run(&self) -> Result<RunStatus> {
        let cfg = config::load()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let engine = cfg.digest_engine();
        let inputs = self.inputs();

        let mut out = io::stdout().lock();
        let mut err = io::stderr().lock();
        if self.check {
            run_check(&Verifier::new(engine), &inputs, &mut out, &mut err)
        } else {
            run_digest(&engine, &inputs, &mut out, &mut err)
        }
    }
}

/// Write a parse error (or the help text) to `err` and pick the exit
/// status: `--help` succeeds, any argument error fails.
pub fn handle_parse_error<E: Write>(e: &clap::Error, err: &mut E) -> io::Result<RunStatus> {
    write!(err, "{}", e.render())?;
    if e.kind() == ErrorKind::DisplayHelp {
        Ok(RunStatus::Success)
    } else {
        Ok(RunStatus::Failure)
    }
}

/// Parse the process arguments and dispatch.
pub fn run_from_args() -> Result<RunStatus> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return Ok(handle_parse_error(&e, &mut io::stderr().lock())?),
    };
    cli.run()
}

#[cfg(test)]
mod tests;
