//! Integration tests for the tokenforge CLI
//!
//! These tests invoke the actual binary and verify:
//! - Exit codes (0 = success/valid, 1 = validation errors, 2 = I/O or parse error)
//! - stdout/stderr output
//! - JSON output format
//! - Generated artifact files

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tokenforge_core::TokenDocument;

// ── Helpers ───────────────────────────────────────────────

fn tokenforge_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tokenforge-cli"))
}

fn run_tokenforge(args: &[&str]) -> Output {
    Command::new(tokenforge_bin())
        .args(args)
        .output()
        .expect("failed to execute tokenforge-cli")
}

/// Write the default document to a temp dir and return its path.
fn write_default_doc(dir: &tempfile::TempDir) -> PathBuf {
    write_doc(dir, &TokenDocument::default())
}

fn write_doc(dir: &tempfile::TempDir, doc: &TokenDocument) -> PathBuf {
    let path = dir.path().join("tokens.json");
    fs::write(&path, doc.to_json().unwrap()).unwrap();
    path
}

// ── Version ───────────────────────────────────────────────

#[test]
fn test_version_command() {
    let output = run_tokenforge(&["version"]);
    assert!(output.status.success(), "version should exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("tokenforge"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_flag() {
    let output = run_tokenforge(&["--version"]);
    assert!(output.status.success(), "--version should exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

// ── Init ──────────────────────────────────────────────────

#[test]
fn test_init_prints_parseable_document() {
    let output = run_tokenforge(&["init"]);
    assert!(output.status.success(), "init should exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let doc = TokenDocument::from_json(&stdout).expect("init output should be a valid document");
    assert_eq!(doc, TokenDocument::default());
}

#[test]
fn test_init_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    let output = run_tokenforge(&["init", "--out", path.to_str().unwrap()]);
    assert!(output.status.success());
    let text = fs::read_to_string(&path).unwrap();
    assert!(TokenDocument::from_json(&text).is_ok());
}

// ── Check ─────────────────────────────────────────────────

#[test]
fn test_check_valid_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_default_doc(&dir);
    let output = run_tokenforge(&["check", path.to_str().unwrap()]);
    assert!(output.status.success(), "valid document should exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("valid"));
}

#[test]
fn test_check_invalid_document() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = TokenDocument::default();
    doc.colors.primary.remove("500");
    let path = write_doc(&dir, &doc);

    let output = run_tokenforge(&["check", path.to_str().unwrap()]);
    assert_eq!(
        output.status.code(),
        Some(1),
        "document with errors should exit 1"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error"));
    assert!(stderr.contains("500"));
}

#[test]
fn test_check_nonexistent_file() {
    let output = run_tokenforge(&["check", "nonexistent.json"]);
    assert_eq!(output.status.code(), Some(2), "missing file should exit 2");
}

#[test]
fn test_check_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{not json").unwrap();
    let output = run_tokenforge(&["check", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2), "unparseable file should exit 2");
}

#[test]
fn test_check_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_default_doc(&dir);
    let output = run_tokenforge(&["check", "--json", path.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("should be valid JSON");
    assert_eq!(json["valid"], true);
    assert_eq!(json["errors"], 0);
    // The default document carries the primary-on-white contrast warning.
    assert_eq!(json["warnings"], 1);
    assert_eq!(json["findings"][0]["category"], "contrast");
}

#[test]
fn test_check_json_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = TokenDocument::default();
    doc.spacing.insert("4".to_string(), "-1rem".to_string());
    let path = write_doc(&dir, &doc);

    let output = run_tokenforge(&["check", "--json", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"], 1);
    let findings = json["findings"].as_array().unwrap();
    assert!(findings
        .iter()
        .any(|f| f["tokenPath"] == "spacing.4" && f["severity"] == "error"));
}

// ── Build ─────────────────────────────────────────────────

#[test]
fn test_build_writes_both_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_default_doc(&dir);
    let out_dir = dir.path().join("dist");

    let output = run_tokenforge(&[
        "build",
        path.to_str().unwrap(),
        "--out-dir",
        out_dir.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "build should exit 0");

    let css = fs::read_to_string(out_dir.join("tokens.css")).unwrap();
    assert!(css.starts_with(":root {"));
    assert!(css.contains("--color-primary-500: #3b82f6;"));

    let config = fs::read_to_string(out_dir.join("tokens.config.js")).unwrap();
    assert!(config.contains("export default"));
    assert!(config.contains("500: '#3b82f6',"));
}

#[test]
fn test_build_css_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_default_doc(&dir);
    let out_dir = dir.path().join("dist");

    let output = run_tokenforge(&[
        "build",
        path.to_str().unwrap(),
        "--out-dir",
        out_dir.to_str().unwrap(),
        "--css-only",
    ]);
    assert!(output.status.success());
    assert!(out_dir.join("tokens.css").exists());
    assert!(!out_dir.join("tokens.config.js").exists());
}

#[test]
fn test_build_never_blocks_on_errors() {
    // Export is advisory: a broken document still builds, the findings
    // just land on stderr.
    let dir = tempfile::tempdir().unwrap();
    let mut doc = TokenDocument::default();
    doc.colors.primary.remove("500");
    let path = write_doc(&dir, &doc);
    let out_dir = dir.path().join("dist");

    let output = run_tokenforge(&[
        "build",
        path.to_str().unwrap(),
        "--out-dir",
        out_dir.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "build should exit 0 despite errors");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error"));
    assert!(out_dir.join("tokens.css").exists());
}

#[test]
fn test_build_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_default_doc(&dir);
    let out_a = dir.path().join("a");
    let out_b = dir.path().join("b");

    for out in [&out_a, &out_b] {
        let output = run_tokenforge(&[
            "build",
            path.to_str().unwrap(),
            "--out-dir",
            out.to_str().unwrap(),
        ]);
        assert!(output.status.success());
    }

    assert_eq!(
        fs::read(out_a.join("tokens.css")).unwrap(),
        fs::read(out_b.join("tokens.css")).unwrap()
    );
    assert_eq!(
        fs::read(out_a.join("tokens.config.js")).unwrap(),
        fs::read(out_b.join("tokens.config.js")).unwrap()
    );
}

// ── Size ──────────────────────────────────────────────────

#[test]
fn test_size_reports_both_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_default_doc(&dir);
    let output = run_tokenforge(&["size", path.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("css"));
    assert!(stdout.contains("config"));
    assert!(stdout.contains("KB"));
}

#[test]
fn test_size_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_default_doc(&dir);
    let output = run_tokenforge(&["size", "--json", path.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(json["css"]["bytes"].as_u64().unwrap() > 0);
    assert_eq!(json["css"]["sha256"].as_str().unwrap().len(), 64);
    assert!(json["config"]["size"].as_str().unwrap().ends_with("KB"));
}
