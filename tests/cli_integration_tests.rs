//! CLI Integration Tests
//!
//! Tests the CLI binary directly using assert_cmd to exercise main.rs code paths.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn liftsheet() -> Command {
    let mut cmd = Command::cargo_bin("liftsheet").unwrap();
    cmd.env_remove("LIFTSHEET_CONFIG").env_remove("RUST_LOG");
    cmd
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    liftsheet()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("liftsheet"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    liftsheet()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("liftsheet"));
}

#[test]
fn test_import_help() {
    liftsheet()
        .args(["import", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Import a workout workbook"));
}

// ═══════════════════════════════════════════════════════════════════════════
// COMMAND TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_template_import_inspect() {
    let temp_dir = TempDir::new().unwrap();
    let xlsx = temp_dir.path().join("program.xlsx");
    let seed = temp_dir.path().join("seed_data.json");

    liftsheet()
        .arg("template")
        .arg(&xlsx)
        .assert()
        .success()
        .stdout(predicate::str::contains("Template written"));

    liftsheet()
        .arg("import")
        .arg(&xlsx)
        .arg(&seed)
        .assert()
        .success()
        .stdout(predicate::str::contains("Import Complete"))
        .stdout(predicate::str::contains("Workouts:  7"));

    assert!(seed.exists());

    liftsheet()
        .arg("inspect")
        .arg(&seed)
        .assert()
        .success()
        .stdout(predicate::str::contains("Spartan Elite"))
        .stdout(predicate::str::contains("- [Group: A] Back Squat"))
        .stdout(predicate::str::contains("Rest: 2-3 min (120s)"));
}

#[test]
fn test_sheets_command() {
    let temp_dir = TempDir::new().unwrap();
    let xlsx = temp_dir.path().join("program.xlsx");
    let config = temp_dir.path().join("config.yaml");
    std::fs::write(
        &config,
        "sheets:\n  - { sheet: \"DAY 1 - MON\", day: 1 }\n  - { sheet: \"Extra\", day: 3 }\n",
    )
    .unwrap();

    liftsheet().arg("template").arg(&xlsx).assert().success();

    liftsheet()
        .arg("sheets")
        .arg(&xlsx)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sheets (7)"))
        .stdout(predicate::str::contains("unmapped"))
        .stdout(predicate::str::contains("Configured but missing"))
        .stdout(predicate::str::contains("Extra"));
}

#[test]
fn test_import_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    liftsheet()
        .arg("import")
        .arg(temp_dir.path().join("missing.xlsx"))
        .arg(temp_dir.path().join("out.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Excel error"));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.yaml");
    std::fs::write(&config, "sheets:\n  - { sheet: \"X\", day: 9 }\n").unwrap();

    liftsheet()
        .arg("template")
        .arg(temp_dir.path().join("t.xlsx"))
        .env("LIFTSHEET_CONFIG", &config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
