//! Binary-level tests: exit codes and printed output

use crate::integration::test_utils::{cli, write_app_settings};
use tempfile::TempDir;

#[test]
fn test_no_subcommand_prints_help_and_version() {
    let temp_dir = TempDir::new().unwrap();
    let output = cli(temp_dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"), "stdout: {}", stdout);
    assert!(stdout.contains("info"));
    assert!(stdout.contains(&format!("console-template {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_info_with_relative_input_directory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join("data")).unwrap();

    let output = cli(temp_dir.path())
        .args(["info", "--input-directory", "./data"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = dunce::canonicalize(temp_dir.path().join("data")).unwrap();
    assert!(stdout.contains(&format!("Input directory: {}", expected.display())));
    assert!(stdout.contains("Output directory: (not set)"));
    assert!(stdout.contains("Validate InfoCommand"));
}

#[test]
fn test_info_uses_configured_fallbacks() {
    let temp_dir = TempDir::new().unwrap();
    write_app_settings(
        temp_dir.path(),
        r#"{ "Commands": { "InfoCmd": { "OutputDirectory": "./generated" } } }"#,
    );

    let output = cli(temp_dir.path()).arg("info").output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(temp_dir.path().join("generated").is_dir());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("console-template.appsettings.json"));
}

#[test]
fn test_strict_validation_failure_exits_with_distinct_code() {
    let temp_dir = TempDir::new().unwrap();
    write_app_settings(
        temp_dir.path(),
        r#"{ "Commands": { "InfoCmd": { "IgnoreFailures": false } } }"#,
    );

    let output = cli(temp_dir.path()).arg("info").output().unwrap();

    assert_eq!(output.status.code(), Some(3));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("InfoCommand Validation Error: Configuration key not found"));
    assert!(!stdout.contains("Input directory:"));
}

#[test]
fn test_missing_explicit_config_is_a_bootstrap_error() {
    let temp_dir = TempDir::new().unwrap();

    let output = cli(temp_dir.path())
        .args(["--config", "absent.json", "info"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"));
}

#[test]
fn test_unknown_option_is_a_usage_error() {
    let temp_dir = TempDir::new().unwrap();

    let output = cli(temp_dir.path())
        .args(["info", "--no-such-option"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--no-such-option"));
}

#[test]
fn test_validation_failure_and_usage_error_codes_differ() {
    let temp_dir = TempDir::new().unwrap();
    write_app_settings(
        temp_dir.path(),
        r#"{ "Commands": { "InfoCmd": { "IgnoreFailures": false } } }"#,
    );

    let rejected = cli(temp_dir.path()).arg("info").output().unwrap();
    let mistyped = cli(temp_dir.path()).args(["info", "--bogus"]).output().unwrap();

    assert_eq!(rejected.status.code(), Some(3));
    assert_eq!(mistyped.status.code(), Some(2));
    assert_ne!(rejected.status.code(), mistyped.status.code());
}
