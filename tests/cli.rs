//! End-to-end tests of the sandbox-conform binary.
//!
//! These run on an ordinary host, where every restricted syscall is
//! permitted, so the full suite is expected to fail there.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

#[allow(deprecated)]
fn conform_cmd() -> Command {
    Command::cargo_bin("sandbox-conform").expect("sandbox-conform binary not found")
}

/// `<tmp>/python/{bin,lib}` and nothing else
fn sandbox_tree() -> TempDir {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("python/bin")).unwrap();
    fs::create_dir_all(tmp.path().join("python/lib")).unwrap();
    tmp
}

fn run_against(tmp: &Path) -> (i32, String) {
    let output = conform_cmd()
        .arg("--root")
        .arg(tmp.join("python"))
        .arg("--scan")
        .arg(tmp)
        .output()
        .expect("failed to run sandbox-conform");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8(output.stdout).unwrap(),
    )
}

fn parse_summary(line: &str) -> (usize, usize, usize) {
    let parts: Vec<&str> = line.split(' ').collect();
    assert_eq!(parts.len(), 6, "unexpected summary line: {line}");
    assert_eq!(parts[1], "succeeded,");
    assert_eq!(parts[3], "skipped,");
    assert_eq!(parts[5], "failed");
    (
        parts[0].parse().unwrap(),
        parts[2].parse().unwrap(),
        parts[4].parse().unwrap(),
    )
}

#[test]
fn help_works() {
    conform_cmd().arg("--help").assert().success();
}

#[test]
fn list_prints_checks_in_order_without_running() {
    conform_cmd()
        .arg("--list")
        .assert()
        .success()
        .stdout(
            "filesystem()\n\
             no_fork()\n\
             kill(0, 0)\n\
             waitpid(0, &stat, 0)\n\
             wait4(0, &stat, 0, 0)\n\
             umount(\"/python/bin\")\n\
             pipe(fd)\n\
             chmod(\"/python/bin\", 0777)\n",
        );
}

#[test]
fn relative_root_is_rejected() {
    conform_cmd()
        .args(["--root", "python"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn unrestricted_host_fails_the_run() {
    let tmp = sandbox_tree();
    let (code, stdout) = run_against(tmp.path());
    let lines: Vec<&str> = stdout.lines().collect();

    // One line per check plus the summary: the forked child printed nothing.
    assert_eq!(lines.len(), 9, "unexpected output:\n{stdout}");
    assert_eq!(lines[0], "ok   filesystem()");
    assert_eq!(
        lines[1],
        "ERR  no_fork(): fork succeeded when expected ENOSYS"
    );
    assert_eq!(lines[2], "ERR  kill(0, 0): succeeded when expected ENOSYS");
    // The fork check reaped its child, so neither wait finds one.
    assert_eq!(
        lines[3],
        "ERR  waitpid(0, &stat, 0): failed with No child processes when expected ENOSYS"
    );
    assert_eq!(
        lines[4],
        "ERR  wait4(0, &stat, 0, 0): failed with No child processes when expected ENOSYS"
    );
    assert!(lines[5].starts_with("ERR  umount("), "{}", lines[5]);
    assert!(lines[5].ends_with(" when expected ENOSYS"), "{}", lines[5]);
    assert!(!lines[5].contains("succeeded"), "{}", lines[5]);
    assert_eq!(lines[6], "ERR  pipe(fd): succeeded when expected ENOSYS");
    assert!(lines[7].starts_with("SKIP chmod("));

    let (passed, skipped, failed) = parse_summary(lines[8]);
    assert_eq!(passed + skipped + failed, 8);
    assert_eq!(skipped, 1);
    assert!(failed > 0);
    assert_eq!(code, 1);
}

#[test]
fn missing_subdirectory_only_changes_filesystem_check() {
    let good = sandbox_tree();
    let (_, good_out) = run_against(good.path());

    let broken = sandbox_tree();
    fs::remove_dir(broken.path().join("python/lib")).unwrap();
    let (_, broken_out) = run_against(broken.path());

    let good_lines: Vec<&str> = good_out.lines().collect();
    let broken_lines: Vec<&str> = broken_out.lines().collect();
    assert_eq!(good_lines.len(), broken_lines.len());

    assert_eq!(
        broken_lines[0],
        format!(
            "ERR  filesystem(): Expected a directory: {}",
            broken.path().join("python/lib").display()
        )
    );

    // umount/chmod names carry the tree path, compare the verdict part only.
    for (good, broken) in good_lines[1..good_lines.len() - 1]
        .iter()
        .zip(&broken_lines[1..broken_lines.len() - 1])
    {
        let tag = |line: &str| line.split_whitespace().next().unwrap().to_string();
        let message = |line: &str| line.rsplit_once("): ").map(|(_, m)| m.to_string());
        assert_eq!(tag(good), tag(broken));
        assert_eq!(message(good), message(broken));
    }

    let (good_passed, _, good_failed) = parse_summary(good_lines.last().unwrap());
    let (broken_passed, _, broken_failed) = parse_summary(broken_lines.last().unwrap());
    assert_eq!(broken_passed, good_passed - 1);
    assert_eq!(broken_failed, good_failed + 1);
}

#[test]
fn visible_usr_is_reported() {
    let tmp = sandbox_tree();
    fs::create_dir(tmp.path().join("usr")).unwrap();
    let (code, stdout) = run_against(tmp.path());

    let expected = format!(
        "ERR  filesystem(): Unexpected entry {}",
        tmp.path().join("usr").display()
    );
    assert_eq!(stdout.lines().next(), Some(expected.as_str()));
    assert_eq!(code, 1);
}

#[test]
fn json_report_covers_every_check() {
    let tmp = sandbox_tree();
    let output = conform_cmd()
        .arg("--root")
        .arg(tmp.path().join("python"))
        .arg("--scan")
        .arg(tmp.path())
        .args(["--format", "json"])
        .output()
        .expect("failed to run sandbox-conform");

    assert_eq!(output.status.code(), Some(1));
    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");

    let checks = report["checks"].as_array().unwrap();
    assert_eq!(checks.len(), 8);
    assert_eq!(checks[0]["name"], "filesystem()");
    assert_eq!(checks[0]["verdict"], "pass");
    assert_eq!(checks[7]["verdict"], "skip");

    let summary = &report["summary"];
    let total = summary["passed"].as_u64().unwrap()
        + summary["skipped"].as_u64().unwrap()
        + summary["failed"].as_u64().unwrap();
    assert_eq!(total, 8);
}

#[test]
fn forced_color_does_not_touch_report_lines() {
    let tmp = sandbox_tree();
    let output = conform_cmd()
        .arg("--root")
        .arg(tmp.path().join("python"))
        .arg("--scan")
        .arg(tmp.path())
        .env("CLICOLOR_FORCE", "1")
        .env("CLICOLOR", "1")
        .output()
        .expect("failed to run sandbox-conform");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains('\u{1b}'), "escape codes in report:\n{stdout}");

    let lines: Vec<&str> = stdout.lines().collect();
    let (summary, checks) = lines.split_last().unwrap();
    for line in checks {
        assert!(
            line.starts_with("ok   ") || line.starts_with("SKIP ") || line.starts_with("ERR  "),
            "line breaks the report format: {line:?}"
        );
    }
    parse_summary(summary);
}
