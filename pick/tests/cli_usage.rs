// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! These tests run the `pick` binary. They only cover paths that fail before the
//! terminal is taken over, since there is no interactive terminal under `cargo test`.

use assert_cmd::Command;

fn pick() -> Command { Command::cargo_bin("pick").unwrap() }

#[test]
fn file_argument_with_piped_stdin_is_a_usage_error() {
    let output = pick()
        .arg("Cargo.toml")
        .write_stdin("apple\nbanana\n")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("input is also piped in"));
}

#[test]
fn too_many_arguments_is_a_usage_error() {
    let output = pick()
        .args(["a.txt", "b.txt"])
        .write_stdin("")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn unwritable_log_file_is_reported_not_panicked() {
    let dir = std::env::temp_dir().join("r3bl_pick_cli_tests");
    std::fs::create_dir_all(&dir).unwrap();
    let not_a_dir = dir.join("not_a_dir");
    std::fs::write(&not_a_dir, "").unwrap();
    let log_file = not_a_dir.join("x.log");

    let output = pick()
        .arg("--enable-logging")
        .arg("--log-file")
        .arg(&log_file)
        .write_stdin("apple\n")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("x.log"));
    assert!(!stderr.contains("panicked"));
}

#[test]
fn help_lists_options() {
    let output = pick().arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--enable-logging"));
    assert!(stdout.contains("--prompt"));
    assert!(stdout.contains("--no-color"));
}
