use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn psiftp() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_psiftp"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    psiftp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("psiftp"))
        .stdout(predicate::str::contains("--mount"));
}

#[test]
fn one_shot_listing() {
    let drive = tempdir().unwrap();
    fs::write(drive.path().join("notes.txt"), "hello").unwrap();

    psiftp()
        .arg("--mount")
        .arg(format!("C={}", drive.path().display()))
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt"))
        .stdout(predicate::str::contains("Connected").not());
}

#[test]
fn one_shot_failure_sets_exit_status() {
    let drive = tempdir().unwrap();
    let local = tempdir().unwrap();

    psiftp()
        .current_dir(local.path())
        .arg("--mount")
        .arg(format!("C={}", drive.path().display()))
        .args(["get", "missing.txt"])
        .assert()
        .code(33)
        .stderr(predicate::str::contains("Error: file does not exist"));
}

#[test]
fn failed_cd_keeps_directory() {
    let drive = tempdir().unwrap();

    psiftp()
        .arg("--mount")
        .arg(format!("C={}", drive.path().display()))
        .args(["cd", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Keeping original directory \"C:\\\""));
}

#[test]
fn interactive_session_reads_stdin() {
    let drive = tempdir().unwrap();
    fs::create_dir(drive.path().join("Documents")).unwrap();

    psiftp()
        .arg("--mount")
        .arg(format!("C={}", drive.path().display()))
        .args(["--base-dir", "/Documents"])
        .write_stdin("pwd\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remote dir is: \"C:\\Documents\\\""))
        .stdout(predicate::str::contains("Remote dir: \"C:\\Documents\\\""));
}

#[test]
fn end_of_input_says_bye() {
    let drive = tempdir().unwrap();

    psiftp()
        .arg("--mount")
        .arg(format!("C={}", drive.path().display()))
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("bye\n"));
}

#[test]
fn bad_mount_is_rejected() {
    psiftp().args(["--mount", "nonsense", "pwd"]).assert().failure();
}
