//! Integration tests for the layered configuration loader

use crate::integration::test_utils::with_env;
use console_template::config::{
    command_key, ConfigLoader, ConfigStore, APP_SETTINGS_LOGS_DIRECTORY, LOGGING_LEVEL,
};
use std::path::Path;
use tempfile::TempDir;

fn loader(dir: &Path) -> ConfigLoader {
    ConfigLoader::new()
        .with_directories(vec![dir.to_path_buf()])
        .with_user_file(None)
        .with_environment_name("Integration")
}

#[test]
fn test_environment_variables_override_files() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("console-template.appsettings.json"),
        r#"{ "AppSettings": { "LogsDirectory": "/from/file" } }"#,
    )
    .unwrap();

    let settings = with_env(
        &[("CONSOLE_TEMPLATE__APPSETTINGS__LOGSDIRECTORY", "/from/env")],
        || loader(temp_dir.path()).build().unwrap(),
    );

    assert_eq!(
        settings.get(APP_SETTINGS_LOGS_DIRECTORY),
        Some("/from/env".to_string())
    );
}

#[test]
fn test_environment_variables_can_be_disabled() {
    let temp_dir = TempDir::new().unwrap();

    let settings = with_env(
        &[("CONSOLE_TEMPLATE__COMMANDS__INFOCMD__INPUTDIRECTORY", "/from/env")],
        || {
            loader(temp_dir.path())
                .with_environment_variables(false)
                .build()
                .unwrap()
        },
    );

    assert!(!settings.contains_key(&command_key("InfoCmd", "InputDirectory")));
}

#[test]
fn test_explicit_toml_file_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("override.toml");
    std::fs::write(
        &config_file,
        r#"
[Logging]
Level = "trace"

[Commands.InfoCmd]
OutputDirectory = "./out"
"#,
    )
    .unwrap();

    let settings = loader(temp_dir.path())
        .with_environment_variables(false)
        .with_explicit_file(Some(&config_file))
        .build()
        .unwrap();

    assert_eq!(settings.get(LOGGING_LEVEL), Some("trace".to_string()));
    assert_eq!(
        settings.get(&command_key("InfoCmd", "OutputDirectory")),
        Some("./out".to_string())
    );
    assert_eq!(settings.sources().len(), 1);
}

#[test]
fn test_invalid_json_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("console-template.appsettings.json"),
        "{ not json",
    )
    .unwrap();

    let result = loader(temp_dir.path())
        .with_environment_variables(false)
        .build();
    assert!(result.is_err());
}

#[test]
fn test_working_directory_file_follows_base_directory_file() {
    let base = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();
    std::fs::write(
        base.path().join("console-template.appsettings.json"),
        r#"{ "AppSettings": { "LogsDirectory": "/base" }, "Only": { "Base": "yes" } }"#,
    )
    .unwrap();
    std::fs::write(
        cwd.path().join("console-template.appsettings.json"),
        r#"{ "AppSettings": { "LogsDirectory": "/cwd" } }"#,
    )
    .unwrap();

    let settings = ConfigLoader::new()
        .with_directories(vec![base.path().to_path_buf(), cwd.path().to_path_buf()])
        .with_user_file(None)
        .with_environment_variables(false)
        .build()
        .unwrap();

    assert_eq!(settings.get(APP_SETTINGS_LOGS_DIRECTORY), Some("/cwd".to_string()));
    assert_eq!(settings.get("Only:Base"), Some("yes".to_string()));
    assert_eq!(settings.sources().len(), 2);
}
