//! Tests for CLI argument parsing, run against the built binary.

use std::process::Command;

fn fleetdesk_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fleetdesk"))
}

#[test]
fn test_help_shows_overrides() {
    let output = fleetdesk_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--api-url"));
    assert!(!stdout.contains("--page-size"));
    assert!(stdout.contains("--config"));
}

#[test]
fn test_version_flag() {
    let output = fleetdesk_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_api_url_exits_with_error() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let output = fleetdesk_cmd()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("--api-url")
        .arg("ftp://fleet")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed"));
}

#[test]
fn test_page_size_is_not_a_flag() {
    let output = fleetdesk_cmd()
        .arg("--page-size")
        .arg("25")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--page-size"));
}
