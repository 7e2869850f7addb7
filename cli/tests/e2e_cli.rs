//! End-to-end test for the urboard binary.
//!
//! Runs the compiled CLI against a throwaway config directory and
//! verifies the main command paths work process-to-process.

use std::path::PathBuf;
use std::process::Command;


fn temp_config_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("urboard-e2e-{}-{}", tag, std::process::id()))
}


fn run(config_dir: &PathBuf, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_urboard"))
        .args(args)
        .env("URBOARD_CONFIG_DIR", config_dir)
        .env("LANG", "en_US.UTF-8")
        .output()
        .expect("failed to launch urboard binary")
}


#[test]
fn status_runs_clean() {
    let dir = temp_config_dir("status");
    let out = run(&dir, &["status"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("UrBoard status"));
    let _ = std::fs::remove_dir_all(&dir);
}


#[test]
fn widget_toggle_persists_between_runs() {
    let dir = temp_config_dir("toggle");

    let out = run(&dir, &["widget", "toggle", "clock"]);
    assert!(out.status.success());

    // A second process sees the persisted change.
    let out = run(&dir, &["status"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("1 widget(s) active"));

    let _ = std::fs::remove_dir_all(&dir);
}


#[test]
fn unknown_command_exits_nonzero() {
    let dir = temp_config_dir("unknown");
    let out = run(&dir, &["frobnicate"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Unknown command"));
    let _ = std::fs::remove_dir_all(&dir);
}


#[test]
fn theme_reports_contrast() {
    let dir = temp_config_dir("theme");
    let out = run(&dir, &["accent", "#ffffff"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("\"contrast\":\"#000000\""));
    let _ = std::fs::remove_dir_all(&dir);
}
