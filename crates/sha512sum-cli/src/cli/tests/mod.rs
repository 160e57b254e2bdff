//! CLI tests: argument parsing here, command behavior in submodules.

mod check;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

fn write_file(dir: &std::path::Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path.display().to_string()
}

fn os_args(args: &[String]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

fn parse_error(args: &[&str]) -> (RunStatus, String) {
    let err = Cli::try_parse_from(args).unwrap_err();
    let mut stderr = Vec::new();
    let status = handle_parse_error(&err, &mut stderr).unwrap();
    (status, String::from_utf8(stderr).unwrap())
}

#[test]
fn cli_parse_no_args_reads_stdin() {
    let cli = parse(&["sha512sum"]);
    assert!(!cli.check);
    assert_eq!(cli.inputs(), vec!["-"]);
}

#[test]
fn cli_parse_files_keep_order() {
    let cli = parse(&["sha512sum", "b.iso", "a.iso", "-"]);
    assert_eq!(cli.inputs(), vec!["b.iso", "a.iso", "-"]);
}

#[test]
fn cli_parse_check_short_and_long() {
    let cli = parse(&["sha512sum", "-c", "SHA512SUMS"]);
    assert!(cli.check);
    assert_eq!(cli.files, vec!["SHA512SUMS"]);

    let cli = parse(&["sha512sum", "SHA512SUMS", "--check"]);
    assert!(cli.check);
    assert_eq!(cli.files, vec!["SHA512SUMS"]);
}

#[test]
fn cli_help_is_reported_as_display_help() {
    for flag in ["-h", "--help"] {
        let err = Cli::try_parse_from(["sha512sum", flag]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
    let err = Cli::try_parse_from(["sha512sum", "--help", "-c", "x"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
}

#[test]
fn cli_unknown_flag_is_rejected() {
    let err = Cli::try_parse_from(["sha512sum", "--binary", "x"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn help_goes_to_stderr_and_succeeds() {
    for flag in ["-h", "--help"] {
        let (status, stderr) = parse_error(&["sha512sum", flag]);
        assert_eq!(status, RunStatus::Success);
        assert_eq!(status.code(), 0);
        assert!(stderr.contains("Usage: sha512sum"), "{stderr}");
        assert!(stderr.contains("--check"), "{stderr}");
    }
    let (status, _) = parse_error(&["sha512sum", "-h", "--bogus"]);
    assert_eq!(status, RunStatus::Success);
}

#[test]
fn unknown_flag_fails_with_diagnostic() {
    let (status, stderr) = parse_error(&["sha512sum", "--bogus", "x"]);
    assert_eq!(status, RunStatus::Failure);
    assert_eq!(status.code(), 1);
    assert!(stderr.contains("--bogus"), "{stderr}");
}

#[cfg(unix)]
#[test]
fn cli_parse_accepts_non_utf8_file_names() {
    use std::os::unix::ffi::OsStrExt;
    let name = std::ffi::OsStr::from_bytes(b"caf\xe9.txt");
    let cli = Cli::try_parse_from([OsString::from("sha512sum"), name.to_os_string()]).unwrap();
    assert_eq!(cli.inputs(), vec![name.to_os_string()]);
}

#[test]
fn run_status_codes() {
    assert_eq!(RunStatus::Success.code(), 0);
    assert_eq!(RunStatus::Failure.code(), 1);
    assert_eq!(RunStatus::Success.and(RunStatus::Success), RunStatus::Success);
    assert_eq!(RunStatus::Failure.and(RunStatus::Success), RunStatus::Failure);
    assert_eq!(RunStatus::Success.and(RunStatus::Failure), RunStatus::Failure);
}
