//! Tests for the generate command

#![allow(clippy::expect_used)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::commands::generate::run;
use crate::commands::types::Cli;

fn cli_for(dir: &Path) -> Cli {
    Cli {
        dir: dir.to_path_buf(),
        out: None,
        pattern: ".pck".to_string(),
        pretty: false,
        verbose: false,
    }
}

#[test]
fn test_run_writes_manifest_to_default_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("a.pck"), b"a").expect("Failed to write file");

    let report = run(&cli_for(temp_dir.path())).expect("Failed to run generate");

    assert_eq!(report.entry_count, 1);
    assert!(temp_dir.path().join("packs_manifest.json").exists());
}

#[test]
fn test_run_honors_output_override() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("a.pck"), b"a").expect("Failed to write file");

    let out_path = temp_dir.path().join("custom.json");
    let mut cli = cli_for(temp_dir.path());
    cli.out = Some(out_path.clone());

    let report = run(&cli).expect("Failed to run generate");

    assert_eq!(report.out_path, out_path);
    assert!(out_path.exists());
    assert!(!temp_dir.path().join("packs_manifest.json").exists());
}

#[test]
fn test_run_honors_pattern_override() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("a.pck"), b"a").expect("Failed to write file");
    fs::write(temp_dir.path().join("b.bin"), b"b").expect("Failed to write file");

    let mut cli = cli_for(temp_dir.path());
    cli.pattern = ".bin".to_string();

    let report = run(&cli).expect("Failed to run generate");

    assert_eq!(report.entry_count, 1);
    let json = fs::read_to_string(&report.out_path).expect("Failed to read manifest");
    assert!(json.contains("b.bin"));
    assert!(!json.contains("a.pck"));
}

#[test]
fn test_run_fails_for_missing_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let result = run(&cli_for(&temp_dir.path().join("missing")));

    assert!(result.is_err());
}

#[test]
fn test_run_fails_for_file_as_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("plain.txt");
    fs::write(&file_path, b"not a dir").expect("Failed to write file");

    let result = run(&cli_for(&file_path));

    assert!(result.is_err());
}

#[test]
fn test_run_pretty_output_parses() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("a.pck"), b"a").expect("Failed to write file");

    let mut cli = cli_for(temp_dir.path());
    cli.pretty = true;

    let report = run(&cli).expect("Failed to run generate");

    let json = fs::read_to_string(&report.out_path).expect("Failed to read manifest");
    let value: serde_json::Value = serde_json::from_str(&json).expect("Failed to parse manifest");
    assert!(value.get("a.pck").is_some());
}
