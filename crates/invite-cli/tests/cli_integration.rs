//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command
fn cli_cmd() -> Command {
    Command::cargo_bin("wedding-invite-cli").expect("Failed to find wedding-invite-cli binary")
}

/// Write a details file with the given event date into `dir`
fn write_details(dir: &TempDir, date: &str) -> PathBuf {
    let details = serde_json::json!({
        "groom": { "full_name": "Arjun P", "father": "Ravi P", "mother": "Meena R" },
        "bride": { "full_name": "Nila K", "father": "Kumar S", "mother": "Lakshmi V" },
        "event": {
            "date": date,
            "time": "6:30 PM - 9:00 PM",
            "utc_offset": "+05:30",
            "venue": {
                "name": "Lotus Gardens",
                "address": "12 Lake Road",
                "map_link": "https://example.com/map"
            }
        }
    });
    let path = dir.path().join("details.json");
    std::fs::write(&path, details.to_string()).unwrap();
    path
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_show_prints_card() {
    let dir = TempDir::new().unwrap();
    let path = write_details(&dir, "2026-02-06");

    cli_cmd()
        .arg("--details")
        .arg(&path)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("[A & N]"))
        .stdout(predicate::str::contains("Son of:"))
        .stdout(predicate::str::contains("Ravi P & Meena R"))
        .stdout(predicate::str::contains("Friday, February 6, 2026"))
        .stdout(predicate::str::contains("6:30 PM - 9:00 PM"))
        .stdout(predicate::str::contains("https://example.com/map"));
}

#[test]
fn test_show_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .arg("--details")
        .arg(dir.path().join("missing.json"))
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load invitation details"));
}

// ============================================================================
// Countdown Command Tests
// ============================================================================

#[test]
fn test_countdown_after_event_is_zero() {
    let dir = TempDir::new().unwrap();
    let path = write_details(&dir, "2001-01-01");

    cli_cmd()
        .arg("--details")
        .arg(&path)
        .arg("countdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("Counting down to Monday, January 1, 2001"))
        .stdout(predicate::str::contains(
            "00 Days  00 Hours  00 Minutes  00 Seconds",
        ));
}

#[test]
fn test_countdown_future_event_has_days() {
    let dir = TempDir::new().unwrap();
    let path = write_details(&dir, "2999-12-31");

    cli_cmd()
        .arg("--details")
        .arg(&path)
        .arg("countdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("Days"))
        .stdout(predicate::str::contains("00 Days").not());
}

#[test]
fn test_countdown_watch_stops_after_ticks() {
    let dir = TempDir::new().unwrap();
    let path = write_details(&dir, "2999-12-31");

    let output = cli_cmd()
        .arg("--details")
        .arg(&path)
        .args(["countdown", "--watch", "--ticks", "2"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines = stdout.lines().filter(|l| l.contains("Seconds")).count();
    assert_eq!(lines, 3, "initial value plus two ticks, got:\n{}", stdout);
}

#[test]
fn test_countdown_watch_after_event_keeps_ticking_and_exits() {
    let dir = TempDir::new().unwrap();
    let path = write_details(&dir, "2001-01-01");

    let output = cli_cmd()
        .arg("--details")
        .arg(&path)
        .args(["countdown", "--watch", "--ticks", "2"])
        .timeout(std::time::Duration::from_secs(10))
        .output()
        .unwrap();

    assert!(output.status.success(), "countdown did not exit cleanly");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let zeros = stdout
        .lines()
        .filter(|l| *l == "00 Days  00 Hours  00 Minutes  00 Seconds")
        .count();
    assert_eq!(zeros, 3, "frozen value printed once per tick, got:\n{}", stdout);
}

// ============================================================================
// Validate Command Tests
// ============================================================================

#[test]
fn test_validate_reports_target() {
    let dir = TempDir::new().unwrap();
    let path = write_details(&dir, "2026-02-06");

    cli_cmd()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK:"))
        .stdout(predicate::str::contains("2026-02-06T18:30:00+05:30"));
}

#[test]
fn test_validate_rejects_bad_date() {
    let dir = TempDir::new().unwrap();
    let path = write_details(&dir, "06-02-2026");

    cli_cmd()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid event date"));
}

// ============================================================================
// Open Command Tests
// ============================================================================

#[test]
fn test_open_plays_choreography() {
    cli_cmd()
        .arg("open")
        .assert()
        .success()
        .stdout(predicate::str::contains("envelope: flap opening"))
        .stdout(predicate::str::contains("envelope: revealing"))
        .stdout(predicate::str::contains("fully revealed (cycle 1)"));
}
