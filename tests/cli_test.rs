//! Integration tests for the devdoctor binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const MISSING_ADB_AND_XCODE: &str = r#"{
  "adbVersion": null,
  "antVersion": "1.9",
  "androidSdkInstalled": true,
  "xcodeVersion": null,
  "itunesInstalled": true,
  "javaVersion": "1.8"
}"#;

const COMPLETE: &str = r#"{
  "adbVersion": "1.0.41",
  "antVersion": "1.10.12",
  "androidSdkInstalled": true,
  "xcodeVersion": "15.0",
  "itunesInstalled": true,
  "javaVersion": "17.0.2"
}"#;

fn write_file(temp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// A command isolated from the caller's home config and persona env var.
fn devdoctor(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("devdoctor"));
    cmd.env("HOME", temp.path())
        .env("NO_COLOR", "1")
        .env_remove("DEVDOCTOR_PERSONA")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    devdoctor(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("toolchain"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    devdoctor(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn check_primary_on_darwin_reports_tip_between_warnings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let snapshot = write_file(&temp, "snapshot.json", MISSING_ADB_AND_XCODE);

    let output = devdoctor(&temp)
        .args(["check", "--persona", "primary", "--platform", "darwin", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output)?;

    let adb = stdout.find("WARNING: adb").expect("adb warning");
    let tip = stdout.find("TIP:").expect("tip");
    let xcode = stdout.find("WARNING: Xcode").expect("xcode warning");
    assert!(adb < tip && tip < xcode);
    assert!(stdout.contains("Homebrew"));
    assert!(!stdout.contains("Apache Ant"));
    Ok(())
}

#[test]
fn check_legacy_on_windows_reports_adb_only() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let snapshot = write_file(&temp, "snapshot.json", MISSING_ADB_AND_XCODE);

    devdoctor(&temp)
        .args(["check", "--persona", "legacy", "--platform", "windows", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING: adb"))
        .stdout(predicate::str::contains("chocolatey"))
        .stdout(predicate::str::contains("AppBuilder CLI"))
        .stdout(predicate::str::contains("Xcode").not());
    Ok(())
}

#[test]
fn persona_read_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let snapshot = write_file(&temp, "snapshot.json", MISSING_ADB_AND_XCODE);

    devdoctor(&temp)
        .env("DEVDOCTOR_PERSONA", "legacy")
        .args(["check", "--platform", "darwin", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("Xcode").not());
    Ok(())
}

#[test]
fn bare_invocation_reads_persona_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let snapshot = write_file(&temp, "snapshot.json", "{}");
    let config = write_file(&temp, "config.yml", "platform: darwin\n");

    devdoctor(&temp)
        .env("DEVDOCTOR_PERSONA", "legacy")
        .arg("--config")
        .arg(&config)
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING: adb"))
        .stdout(predicate::str::contains("Xcode").not())
        .stdout(predicate::str::contains("Apache Ant").not());
    Ok(())
}

#[test]
fn persona_env_ignores_case() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let snapshot = write_file(&temp, "snapshot.json", MISSING_ADB_AND_XCODE);

    devdoctor(&temp)
        .env("DEVDOCTOR_PERSONA", "LEGACY")
        .args(["check", "--platform", "darwin", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("AppBuilder CLI"))
        .stdout(predicate::str::contains("Xcode").not());
    Ok(())
}

#[test]
fn clean_host_reports_no_issues() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let snapshot = write_file(&temp, "snapshot.json", COMPLETE);

    devdoctor(&temp)
        .args(["check", "--strict", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues were detected."));
    Ok(())
}

#[test]
fn strict_exits_nonzero_on_warnings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let snapshot = write_file(&temp, "snapshot.json", MISSING_ADB_AND_XCODE);

    devdoctor(&temp)
        .args(["check", "--strict", "--platform", "other", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn json_output_lists_warnings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let snapshot = write_file(&temp, "snapshot.json", MISSING_ADB_AND_XCODE);

    let output = devdoctor(&temp)
        .args(["check", "--json", "--platform", "darwin", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output)?;
    let capabilities: Vec<&str> = value["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["capability"].as_str().unwrap())
        .collect();
    assert_eq!(capabilities, vec!["adb", "xcode"]);
    Ok(())
}

#[test]
fn json_output_ignores_silent_mode() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let snapshot = write_file(&temp, "snapshot.json", "{}");
    let config = write_file(&temp, "config.yml", "output: silent\n");

    let output = devdoctor(&temp)
        .arg("--config")
        .arg(&config)
        .args(["check", "--json", "--platform", "other", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output)?;
    assert!(!value["warnings"].as_array().unwrap().is_empty());
    Ok(())
}

#[test]
fn config_file_sets_persona_and_platform() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let snapshot = write_file(&temp, "snapshot.json", MISSING_ADB_AND_XCODE);
    let config = write_file(&temp, "config.yml", "persona: legacy\nplatform: windows\n");

    devdoctor(&temp)
        .arg("--config")
        .arg(&config)
        .args(["check", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("chocolatey"))
        .stdout(predicate::str::contains("Xcode").not());
    Ok(())
}

#[test]
fn tip_once_shows_single_tip() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let snapshot = write_file(&temp, "snapshot.json", "{}");

    let output = devdoctor(&temp)
        .args(["check", "--tip-once", "--platform", "darwin", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output)?;
    assert_eq!(stdout.matches("TIP:").count(), 1);
    Ok(())
}

#[test]
fn missing_config_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    devdoctor(&temp)
        .args(["--config", "does-not-exist.yml", "check"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn missing_snapshot_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    devdoctor(&temp)
        .args(["check", "--snapshot", "absent.json"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Capability snapshot not found"));
    Ok(())
}

#[test]
fn completions_generate_script() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    devdoctor(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("devdoctor"));
    Ok(())
}
