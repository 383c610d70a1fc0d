//! Integration tests for the dartshape CLI
//!
//! These tests exercise the command functions against real files and run
//! the compiled binary end to end.

use std::fs;
use std::process::Command;

use dartshape_cli::{batch_command, classify_command, load_settings, scan_command, OutputFormat};
use dartshape_core::Settings;
use tempfile::TempDir;

const BREAKPOINT_MEMBERS: &str = "\
// Members of class Breakpoint
final int id;
const Breakpoint(this.id);

bool get isReachable;
operator ==() => other is Breakpoint && id == other.id;
String toString() => '';
";

#[test]
fn test_scan_text_output() {
    let output = scan_command(
        "static SemanticsBinding? get instance => _instance;",
        OutputFormat::Text,
        &Settings::default(),
    )
    .unwrap();

    assert_eq!(
        output,
        "sequence:     =>;\nleading text: static SemanticsBinding? get instance"
    );
}

#[test]
fn test_scan_json_output() {
    let output = scan_command("myFunc                 () => null;", OutputFormat::Json, &Settings::default())
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["sequence"], "()=>;");
    assert_eq!(json["leadingText"], "myFunc");
}

#[test]
fn test_scan_honors_scanner_settings() {
    let settings = Settings::from_toml_str("[scanner]\nstrip_type_arguments = false\n").unwrap();
    let output = scan_command("T _wrap<T>() { }", OutputFormat::Json, &settings).unwrap();

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["leadingText"], "T _wrap<T>");
}

#[test]
fn test_classify_text_output() {
    let output = classify_command(
        "static const BlockKind catchClause = const BlockKind._();",
        None,
        OutputFormat::Text,
        &Settings::default(),
    )
    .unwrap();

    assert!(output.contains("kind:      field"));
    assert!(output.contains("name:      catchClause"));
    assert!(output.contains("modifiers: static const"));
    assert!(output.contains("body:      yes"));
    assert!(output.contains("sequence:  =();"));
}

#[test]
fn test_classify_constructor_with_class_name() {
    let output = classify_command(
        "Point.origin() : x = 0, y = 0;",
        Some("Point"),
        OutputFormat::Json,
        &Settings::default(),
    )
    .unwrap();

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["kind"], "constructor");
    assert_eq!(json["name"], "Point.origin");
}

#[test]
fn test_batch_json_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("members.txt");
    fs::write(&input, BREAKPOINT_MEMBERS).unwrap();

    let output = batch_command(&input, Some("Breakpoint"), OutputFormat::Json, &Settings::default())
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    let members = json.as_array().expect("batch output should be an array");

    let kinds: Vec<&str> = members
        .iter()
        .map(|m| m["kind"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec!["field", "constructor", "getter", "operator", "method"]
    );
    assert_eq!(members[3]["shape"]["sequence"], "==()=>==;");
}

#[test]
fn test_batch_text_output_has_one_line_per_member() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("members.txt");
    fs::write(&input, BREAKPOINT_MEMBERS).unwrap();

    let output = batch_command(&input, None, OutputFormat::Text, &Settings::default()).unwrap();

    assert_eq!(output.lines().count(), 5);
    assert!(output.lines().any(|l| l.ends_with("get isReachable")));
}

#[test]
fn test_batch_missing_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");

    let err = batch_command(&missing, None, OutputFormat::Text, &Settings::default()).unwrap_err();
    assert!(err.to_string().contains("Input file not found"));
}

#[test]
fn test_load_settings_from_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("custom.toml");
    fs::write(&config, "[output]\nformat = \"json\"\n").unwrap();

    let settings = load_settings(Some(config.as_path())).unwrap();
    assert_eq!(settings.output.format, dartshape_core::ReportFormat::Json);
}

#[test]
fn test_load_settings_missing_path_fails() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_settings(Some(temp_dir.path().join("nope.toml").as_path())).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
}

#[test]
fn test_binary_scan_from_file_uses_config_format() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("member.dart");
    fs::write(&input, "void dispose() {\n\n}\n").unwrap();
    fs::write(
        temp_dir.path().join("dartshape.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_dartshape"))
        .current_dir(temp_dir.path())
        .arg("scan")
        .arg("--input")
        .arg(&input)
        .output()
        .expect("Failed to run dartshape");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["sequence"], "(){}");
    assert_eq!(json["leadingText"], "void dispose");
}

#[test]
fn test_binary_reports_missing_input() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_dartshape"))
        .current_dir(temp_dir.path())
        .args(["classify", "--input", "does-not-exist.dart"])
        .output()
        .expect("Failed to run dartshape");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Input file not found"));
}
