//! CLI Integration Tests
//!
//! Exercise the headless export path of the binary end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli_cmd() -> Command {
    Command::cargo_bin("jukebox-mlops").expect("Failed to find jukebox-mlops binary")
}

#[test]
fn test_export_writes_html_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("index.html");

    cli_cmd()
        .arg("--export")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported Jukebox Inc MLOps Architecture"));

    let html = std::fs::read_to_string(&path).unwrap().replace("&amp;", "&");
    assert!(html.starts_with("<!DOCTYPE html>"));

    let positions: Vec<usize> = [
        "Jukebox Inc MLOps Architecture</h1>",
        "Data Pipeline & Infrastructure</h2>",
        "Model Lifecycle & Operationalization</h2>",
        "ML Applications</h2>",
        "Edge Cases & Assumptions</h2>",
    ]
    .iter()
    .map(|needle| html.find(needle).expect(needle))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_export_is_repeatable() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.html");
    let second = dir.path().join("second.html");

    cli_cmd().arg("--export").arg(&first).assert().success();
    cli_cmd().arg("-e").arg(&second).assert().success();

    assert_eq!(
        std::fs::read_to_string(&first).unwrap(),
        std::fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("index.html");

    cli_cmd()
        .arg("--export")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to export architecture document"));

    assert!(!path.exists());
}

#[test]
fn test_help_mentions_export() {
    cli_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--export"));
}
