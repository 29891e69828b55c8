//! Integration tests for per-run log files.

use crate::integration::test_utils::{cli, write_app_settings};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn log_files(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok().map(|e| e.path()))
                .filter(|p| {
                    let name = p.file_name().unwrap().to_string_lossy().into_owned();
                    name.starts_with("console-template-") && name.ends_with(".log")
                })
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn test_logs_directory_option_receives_log_file() {
    let temp_dir = TempDir::new().unwrap();
    let logs = temp_dir.path().join("logs");

    let output = cli(temp_dir.path())
        .arg("--logs-directory")
        .arg(&logs)
        .arg("info")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let files = log_files(&logs);
    assert_eq!(files.len(), 1, "log files: {:?}", files);

    let contents = fs::read_to_string(&files[0]).unwrap();
    assert!(contents.contains("LogPath - "));
    assert!(contents.contains("Validate BaseCommand"));
    assert!(contents.contains("LogsDirectory - '"));
}

#[test]
fn test_default_log_file_goes_to_temp_directory() {
    let temp_dir = TempDir::new().unwrap();

    let output = cli(temp_dir.path()).arg("info").output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let files = log_files(&temp_dir.path().join("tmp").join("console-template"));
    assert_eq!(files.len(), 1);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("LogPath - {}", files[0].display())));
}

#[test]
fn test_configured_logs_directory_and_json_format() {
    let temp_dir = TempDir::new().unwrap();
    let logs = temp_dir.path().join("configured-logs");
    write_app_settings(
        temp_dir.path(),
        &format!(
            r#"{{ "AppSettings": {{ "LogsDirectory": {:?} }}, "Logging": {{ "Format": "json", "Output": "file" }} }}"#,
            logs.to_string_lossy()
        ),
    );

    let output = cli(temp_dir.path()).arg("info").output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let files = log_files(&logs);
    assert_eq!(files.len(), 1);

    let contents = fs::read_to_string(&files[0]).unwrap();
    let first: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
    assert!(first.get("fields").is_some());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("LogPath - "));
    assert!(stdout.contains("Input directory:"));
}
