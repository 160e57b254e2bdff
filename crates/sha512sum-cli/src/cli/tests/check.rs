//! Tests for check mode.

use super::{os_args, write_file};
use crate::cli::commands::{run_check, run_digest};
use crate::cli::RunStatus;
use sha512sum_core::{DigestEngine, Verifier};

fn digest_lines(inputs: &[String]) -> String {
    let mut out = Vec::new();
    let mut err = Vec::new();
    run_digest(&DigestEngine::default(), &os_args(inputs), &mut out, &mut err).unwrap();
    String::from_utf8(out).unwrap()
}

fn check(lists: &[String]) -> (anyhow::Result<RunStatus>, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let res = run_check(&Verifier::default(), &os_args(lists), &mut out, &mut err);
    (
        res,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn digest_output_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_file(dir.path(), "data", "payload");
    let list = write_file(dir.path(), "SUMS", &digest_lines(&[data.clone()]));

    let (res, out, err) = check(&[list]);
    assert_eq!(res.unwrap(), RunStatus::Success);
    assert_eq!(
        out,
        format!("{data}: OK\nWARNING: 0 of 1 computed checksums did NOT match\n")
    );
    assert!(err.is_empty());
}

#[test]
fn mismatch_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_file(dir.path(), "data", "payload");
    let list = write_file(dir.path(), "SUMS", &format!("{}  {data}\n", "0".repeat(128)));

    let (res, out, _) = check(&[list]);
    assert_eq!(res.unwrap(), RunStatus::Failure);
    assert!(out.contains(&format!("{data}: FAILED\n")));
    assert!(out.ends_with("WARNING: 1 of 1 computed checksums did NOT match\n"));
}

#[test]
fn malformed_list_is_reported_and_next_list_still_checked() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_file(dir.path(), "data", "payload");
    let bad = write_file(dir.path(), "BAD", &format!("{} {data}\n", "0".repeat(128)));
    let good = write_file(dir.path(), "GOOD", &digest_lines(&[data.clone()]));

    let (res, out, err) = check(&[bad.clone(), good]);
    assert_eq!(res.unwrap(), RunStatus::Failure);
    assert_eq!(err, format!("sha512sum: invalid checksum file syntax: {bad}\n"));
    assert_eq!(
        out,
        format!("{data}: OK\nWARNING: 0 of 1 computed checksums did NOT match\n")
    );
}

#[test]
fn failed_earlier_list_keeps_run_failed() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_file(dir.path(), "data", "payload");
    let failing = write_file(dir.path(), "F", &format!("{}  {data}\n", "0".repeat(128)));
    let passing = write_file(dir.path(), "P", &digest_lines(&[data]));

    let (res, _, _) = check(&[failing, passing]);
    assert_eq!(res.unwrap(), RunStatus::Failure);
}

#[test]
fn missing_target_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let gone = dir.path().join("gone").display().to_string();
    let list = write_file(dir.path(), "SUMS", &format!("{}  {gone}\n", "0".repeat(128)));

    let (res, out, _) = check(&[list]);
    let err = res.unwrap_err();
    assert!(format!("{err:#}").starts_with(&format!("{gone}: ")));
    assert!(out.is_empty());
}

#[test]
fn missing_list_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("NOPE").display().to_string();
    let (res, out, _) = check(&[absent]);
    assert!(res.is_err());
    assert!(out.is_empty());
}

#[cfg(unix)]
#[test]
fn non_utf8_target_round_trips() {
    use std::ffi::{OsStr, OsString};
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join(OsStr::from_bytes(b"caf\xe9.txt"));
    std::fs::write(&target, "latin-1 name").unwrap();

    let mut digests = Vec::new();
    let mut err = Vec::new();
    run_digest(
        &DigestEngine::default(),
        &[target.as_os_str().to_os_string()],
        &mut digests,
        &mut err,
    )
    .unwrap();
    let list = dir.path().join("SUMS");
    std::fs::write(&list, &digests).unwrap();

    let mut out = Vec::new();
    let status = run_check(
        &Verifier::default(),
        &[OsString::from(list.as_os_str())],
        &mut out,
        &mut err,
    )
    .unwrap();
    assert_eq!(status, RunStatus::Success);

    let mut expected = target.as_os_str().as_bytes().to_vec();
    expected.extend_from_slice(b": OK\nWARNING: 0 of 1 computed checksums did NOT match\n");
    assert_eq!(out, expected);
    assert!(err.is_empty());
}
