//! A fatal failure on one file stops the batch before the next file.

use std::fs;
use tempfile::tempdir;

use spacerm::{ActionTaken, OperationController, RunOptions, SpacermError, TerminalConsole};

#[test]
fn missing_file_aborts_remaining() {
    let td = tempdir().unwrap();
    let first = td.path().join("one file");
    let missing = td.path().join("not here");
    let last = td.path().join("last file");
    fs::write(&first, "1").unwrap();
    fs::write(&last, "3").unwrap();

    let console = TerminalConsole::new(std::io::empty(), Vec::new());
    let mut ctl = OperationController::new(RunOptions::default(), console);
    let err = ctl
        .run([
            first.to_str().unwrap(),
            missing.to_str().unwrap(),
            last.to_str().unwrap(),
        ])
        .unwrap_err();

    assert_eq!(err.path, missing.to_str().unwrap());
    assert!(matches!(err.error, SpacermError::Io { op: "stat", .. }));
    assert_eq!(err.completed.len(), 1);
    assert_eq!(err.completed[0].action, ActionTaken::Renamed);

    assert!(td.path().join("onefile").exists(), "file before the failure is done");
    assert!(last.exists(), "file after the failure must not be attempted");
    assert!(!td.path().join("lastfile").exists());
}

#[test]
fn directory_argument_aborts() {
    let td = tempdir().unwrap();
    let dir = td.path().join("a dir");
    fs::create_dir(&dir).unwrap();
    let after = td.path().join("after it");
    fs::write(&after, "x").unwrap();

    let console = TerminalConsole::new(std::io::empty(), Vec::new());
    let mut ctl = OperationController::new(RunOptions::default(), console);
    let err = ctl
        .run([dir.to_str().unwrap(), after.to_str().unwrap()])
        .unwrap_err();
    assert!(matches!(err.error, SpacermError::NotRegularFile(_)));
    assert!(err.completed.is_empty());
    assert!(dir.exists());
    assert!(after.exists());
}

#[test]
fn naming_failure_does_not_abort() {
    let td = tempdir().unwrap();
    let bad = td.path().join("   ");
    let good = td.path().join("g ood");
    fs::write(&bad, "x").unwrap();
    fs::write(&good, "y").unwrap();

    let console = TerminalConsole::new(std::io::empty(), Vec::new());
    let mut ctl = OperationController::new(RunOptions::default(), console);
    let outcomes = ctl
        .run([bad.to_str().unwrap(), good.to_str().unwrap()])
        .unwrap();
    assert_eq!(outcomes[0].action, ActionTaken::Failed);
    assert_eq!(outcomes[1].action, ActionTaken::Renamed);
    assert!(bad.exists());
    assert!(td.path().join("good").exists());
}

#[test]
fn binary_exits_nonzero_on_fatal() {
    let td = tempdir().unwrap();
    let last = td.path().join("last file");
    fs::write(&last, "x").unwrap();

    let me = assert_cmd::cargo::cargo_bin!("spacerm");
    let out = std::process::Command::new(me)
        .arg(td.path().join("missing file"))
        .arg(&last)
        .output()
        .expect("spawn binary");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("stat"), "stderr: {stderr}");
    assert!(!stderr.contains('\x1b'), "no color codes when piped: {stderr:?}");
    assert!(last.exists());
}

#[test]
fn binary_reports_bad_name_before_a_later_abort() {
    let td = tempdir().unwrap();
    let bad = td.path().join("   ");
    fs::write(&bad, "x").unwrap();
    let missing = td.path().join("missing file");

    let me = assert_cmd::cargo::cargo_bin!("spacerm");
    let out = std::process::Command::new(me)
        .arg(&bad)
        .arg(&missing)
        .output()
        .expect("spawn binary");
    assert_eq!(out.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&out.stderr);
    let path_error = stderr
        .find("spacerm: path error: invalid path")
        .unwrap_or_else(|| panic!("bad name not reported: {stderr}"));
    let abort = stderr.find("missing file").unwrap();
    assert!(path_error < abort, "stderr: {stderr}");
    assert!(bad.exists());
}
