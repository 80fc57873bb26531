//! Dry-run never touches the filesystem, whatever else is enabled.

use std::fs;
use std::path::Path;
use tempfile::tempdir;

use spacerm::{
    ActionTaken, OperationController, RunOptions, SkipReason, SpacePolicy, TerminalConsole,
    TransformPolicy,
};

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn dry_run_reports_without_changes() {
    let td = tempdir().unwrap();
    let a = td.path().join("first file.txt");
    let b = td.path().join("second (1).txt");
    fs::write(&a, "a").unwrap();
    fs::write(&b, "b").unwrap();
    let before = listing(td.path());

    for backup in [false, true] {
        let opts = RunOptions {
            policy: TransformPolicy::new("()", SpacePolicy::Underscore),
            backup,
            dry_run: true,
            verbose: true,
            interactive: false,
        };
        let console = TerminalConsole::new(std::io::empty(), Vec::new());
        let mut ctl = OperationController::new(opts, console);
        let outcomes = ctl
            .run([a.to_str().unwrap(), b.to_str().unwrap()])
            .unwrap();
        assert!(
            outcomes
                .iter()
                .all(|o| o.action == ActionTaken::Skipped(SkipReason::DryRun))
        );

        let (_, out) = ctl.into_console().into_inner();
        let out = String::from_utf8(out).unwrap();
        let verb = if backup { "copy" } else { "rename" };
        let expected = format!(
            "{verb} file: '{}' -> '{}'\n{verb} file: '{}' -> '{}'\n",
            a.display(),
            td.path().join("first_file.txt").display(),
            b.display(),
            td.path().join("second_1.txt").display(),
        );
        assert_eq!(out, expected);
        assert_eq!(listing(td.path()), before);
    }
}

#[test]
fn dry_run_after_yes_still_does_nothing() {
    let td = tempdir().unwrap();
    let a = td.path().join("x y");
    fs::write(&a, "a").unwrap();

    let opts = RunOptions {
        interactive: true,
        dry_run: true,
        ..Default::default()
    };
    let console = TerminalConsole::new(std::io::Cursor::new("y\n"), Vec::new());
    let mut ctl = OperationController::new(opts, console);
    let outcomes = ctl.run([a.to_str().unwrap()]).unwrap();
    assert_eq!(outcomes[0].action, ActionTaken::Skipped(SkipReason::DryRun));
    assert!(a.exists());
    assert!(!td.path().join("xy").exists());
}

#[test]
fn dry_run_lists_already_clean_names() {
    let td = tempdir().unwrap();
    let clean = td.path().join("clean.txt");
    fs::write(&clean, "x").unwrap();
    let cfg = td.path().join("config.xml");
    fs::write(&cfg, "<config></config>").unwrap();

    let me = assert_cmd::cargo::cargo_bin!("spacerm");
    let out = std::process::Command::new(me)
        .env("SPACERM_CONFIG", &cfg)
        .args(["-n", "-v"])
        .arg(&clean)
        .output()
        .expect("spawn binary");
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        format!("rename file: '{0}' -> '{0}'\n", clean.display())
    );
    assert_eq!(fs::read_to_string(&clean).unwrap(), "x");
}

#[test]
fn dry_run_binary_prints_and_leaves_fixture() {
    use assert_fs::prelude::*;

    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("holiday photo (2).jpg");
    input.write_str("jpeg").unwrap();
    let cfg = temp.child("config.xml");
    cfg.write_str("<config></config>").unwrap();

    let me = assert_cmd::cargo::cargo_bin!("spacerm");
    let out = std::process::Command::new(me)
        .env("SPACERM_CONFIG", cfg.path())
        .args(["-n", "-d", "-s", "()"])
        .arg(input.path())
        .output()
        .expect("spawn binary");
    assert!(out.status.success());

    let expected = temp.child("holiday-photo-2.jpg");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout,
        format!(
            "rename file: '{}' -> '{}'\n",
            input.path().display(),
            expected.path().display()
        )
    );
    assert!(input.path().exists());
    assert!(!expected.path().exists());

    temp.close().unwrap();
}
