// Integration tests for Matchmap

use assert_cmd::Command;
use matchmap::{ChartRenderer, JsonWriter, MatchCounts, Matcher, Scanner, SearchMode};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Build the reference tree: a/x.txt and a/y.log both match "foo" by
/// content, b/foo.txt matches by name.
fn reference_tree() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir(dir.path().join("a")).unwrap();
    fs::create_dir(dir.path().join("b")).unwrap();
    fs::write(dir.path().join("a/x.txt"), "foo\n").unwrap();
    fs::write(dir.path().join("a/y.log"), "saw foo again\n").unwrap();
    fs::write(dir.path().join("b/foo.txt"), "irrelevant\n").unwrap();
    dir
}

fn scan(root: &TempDir, pattern: &str, mode: SearchMode) -> MatchCounts {
    let matcher = Matcher::new(pattern, mode).expect("Failed to compile pattern");
    Scanner::new(matcher).scan(root.path()).expect("Scan failed")
}

// ============================================================================
// Scan Tests
// ============================================================================

#[test]
fn test_scan_reference_tree() {
    let root = reference_tree();
    let results = scan(&root, "foo", SearchMode::Both);

    assert_eq!(results.get(""), Some(0));
    assert_eq!(results.get("a"), Some(2));
    assert_eq!(results.get("b"), Some(1));
    assert_eq!(results.len(), 3);
}

#[test]
fn test_scan_mode_dominance() {
    let root = reference_tree();
    let both = scan(&root, "foo", SearchMode::Both);
    let name = scan(&root, "foo", SearchMode::Filename);
    let content = scan(&root, "foo", SearchMode::Content);

    for (key, count) in both.iter() {
        assert!(count >= name.get(key).unwrap(), "both < filename for {:?}", key);
        assert!(count >= content.get(key).unwrap(), "both < content for {:?}", key);
    }
}

#[test]
fn test_scan_keys_every_directory() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("deep/deeper/deepest")).unwrap();

    let results = scan(&root, "foo", SearchMode::Both);

    assert_eq!(results.len(), 4);
    for (_, count) in results.iter() {
        assert_eq!(count, 0);
    }
}

// ============================================================================
// Output Tests
// ============================================================================

#[test]
fn test_json_round_trip() {
    let root = reference_tree();
    let results = scan(&root, "foo", SearchMode::Both);

    let out = TempDir::new().unwrap();
    let json_path = out.path().join("results.json");
    JsonWriter::write(&results, &json_path).expect("JSON write failed");

    let contents = fs::read_to_string(&json_path).unwrap();
    let parsed: MatchCounts = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed, results);
}

#[test]
fn test_chart_renders_scan_results() {
    let root = reference_tree();
    let results = scan(&root, "foo", SearchMode::Both);

    let out = TempDir::new().unwrap();
    let chart_path = out.path().join("results.png");
    ChartRenderer::default()
        .render(&results, &chart_path)
        .expect("Chart render failed");

    let metadata = fs::metadata(&chart_path).unwrap();
    assert!(metadata.len() > 0, "chart should not be empty");
}

#[test]
fn test_chart_handles_empty_results() {
    let root = TempDir::new().unwrap();
    let results = scan(&root, "foo", SearchMode::Both);
    assert_eq!(results.len(), 1); // just the root key

    let out = TempDir::new().unwrap();
    let chart_path = out.path().join("results.png");
    ChartRenderer::default()
        .render(&results, &chart_path)
        .expect("Chart render failed");

    assert!(chart_path.exists());
}

// ============================================================================
// Binary Tests
// ============================================================================

#[test]
fn test_cli_end_to_end() {
    let root = reference_tree();
    let out = TempDir::new().unwrap();

    Command::cargo_bin("matchmap")
        .unwrap()
        .args([
            "--root_dir",
            root.path().to_str().unwrap(),
            "--keyword",
            "foo",
            "--output_dir",
            out.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Results saved to"))
        .stdout(predicate::str::contains("Chart saved to"));

    let json = fs::read_to_string(out.path().join("results.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[""], 0);
    assert_eq!(value["a"], 2);
    assert_eq!(value["b"], 1);

    assert!(out.path().join("results.png").exists());
}

#[test]
fn test_cli_creates_output_directory() {
    let root = reference_tree();
    let out = TempDir::new().unwrap();
    let nested = out.path().join("nested").join("deeper");

    Command::cargo_bin("matchmap")
        .unwrap()
        .args([
            "--root_dir",
            root.path().to_str().unwrap(),
            "--keyword",
            "foo",
            "--output_dir",
            nested.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(nested.join("results.json").exists());
    assert!(nested.join("results.png").exists());
}

#[test]
fn test_cli_filename_mode() {
    let root = reference_tree();
    let out = TempDir::new().unwrap();

    Command::cargo_bin("matchmap")
        .unwrap()
        .args([
            "--root_dir",
            root.path().to_str().unwrap(),
            "--keyword",
            "foo",
            "--mode",
            "filename",
            "--output_dir",
            out.path().to_str().unwrap(),
        ])
        .assert()
        .success();

    let json = fs::read_to_string(out.path().join("results.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["a"], 0);
    assert_eq!(value["b"], 1);
}

#[test]
fn test_cli_invalid_regex_fails() {
    let root = reference_tree();

    Command::cargo_bin("matchmap")
        .unwrap()
        .args([
            "--root_dir",
            root.path().to_str().unwrap(),
            "--keyword",
            "(unclosed",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pattern"));
}

#[test]
fn test_cli_missing_root_fails() {
    Command::cargo_bin("matchmap")
        .unwrap()
        .args(["--root_dir", "/nonexistent/tree", "--keyword", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/tree"));
}

#[test]
fn test_cli_custom_config() {
    let root = reference_tree();
    let out = TempDir::new().unwrap();
    let config_path = out.path().join("matchmap.toml");
    fs::write(&config_path, "[chart]\nwidth = 640\nheight = 480\n").unwrap();

    Command::cargo_bin("matchmap")
        .unwrap()
        .args([
            "--root_dir",
            root.path().to_str().unwrap(),
            "--keyword",
            "foo",
            "--output_dir",
            out.path().to_str().unwrap(),
            "--config",
            config_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(out.path().join("results.png").exists());
}

#[test]
fn test_cli_invalid_config_fails() {
    let root = reference_tree();
    let out = TempDir::new().unwrap();
    let config_path = out.path().join("matchmap.toml");
    fs::write(&config_path, "[chart]\nwidth = 0\n").unwrap();

    Command::cargo_bin("matchmap")
        .unwrap()
        .args([
            "--root_dir",
            root.path().to_str().unwrap(),
            "--keyword",
            "foo",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config validation"));
}

#[test]
fn test_cli_verbose_echoes_settings() {
    let root = reference_tree();
    let out = TempDir::new().unwrap();

    Command::cargo_bin("matchmap")
        .unwrap()
        .args([
            "--root_dir",
            root.path().to_str().unwrap(),
            "--keyword",
            "foo",
            "--output_dir",
            out.path().to_str().unwrap(),
            "--verbose",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pattern: foo"));
}
