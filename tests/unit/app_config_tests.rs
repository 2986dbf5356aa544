/*!
 * Tests for application configuration functionality
 */

use std::fs;
use std::path::PathBuf;
use anyhow::Result;
use doc_translate::app_config::{Config, LogLevel};
use doc_translate::errors::ConfigError;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.docs_root, PathBuf::from("hypnoscript-docs").join("docs"));
    assert_eq!(config.root_files, vec!["index.md", "intro.md"]);
    assert_eq!(config.directories.len(), 9);
    assert_eq!(config.directories.first().map(String::as_str), Some("builtins"));
    assert_eq!(config.directories.last().map(String::as_str), Some("tutorial-extras"));
    assert_eq!(config.extension, "md");
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.extension = "".to_string();
    assert_eq!(config.validate(), Err(ConfigError::InvalidExtension("".to_string())));

    config.extension = ".md".to_string();
    assert!(config.validate().is_ok());

    config.extension = "a/b".to_string();
    assert!(config.validate().is_err());
    config.extension = "md".to_string();

    config.directories.push("../elsewhere".to_string());
    assert_eq!(config.validate(), Err(ConfigError::InvalidTarget("../elsewhere".to_string())));
    config.directories.pop();

    config.root_files.push("/etc/passwd".to_string());
    assert!(config.validate().is_err());
}

/// Test that a missing config file is created with defaults
#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("doc-translate.json");

    let config = Config::load_or_create(&path)?;

    assert_eq!(config, Config::default());
    assert!(path.exists());
    let reloaded = Config::load_or_create(&path)?;
    assert_eq!(reloaded, config);

    Ok(())
}

/// Test that a partial config file falls back to defaults for missing fields
#[test]
fn test_load_or_create_withPartialFile_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "docs_root": "site/docs", "log_level": "debug" }"#,
    )?;

    let config = Config::load_or_create(&path)?;

    assert_eq!(config.docs_root, PathBuf::from("site/docs"));
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.extension, "md");
    assert_eq!(config.root_files, Config::default().root_files);

    Ok(())
}

/// Test that malformed JSON is reported instead of replaced
#[test]
fn test_load_or_create_withMalformedFile_shouldError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    assert!(Config::load_or_create(&path).is_err());
    assert_eq!(fs::read_to_string(&path)?, "{ not json");

    Ok(())
}

/// Test target path resolution against the docs root
#[test]
fn test_target_paths_shouldJoinDocsRoot() {
    let config = Config {
        docs_root: PathBuf::from("docs"),
        root_files: vec!["intro.md".to_string()],
        directories: vec!["cli".to_string()],
        ..Config::default()
    };

    assert_eq!(config.root_file_paths(), vec![PathBuf::from("docs/intro.md")]);
    assert_eq!(config.directory_paths(), vec![PathBuf::from("docs/cli")]);
}

/// Test that command-line overrides win over loaded values
#[test]
fn test_apply_overrides_withValues_shouldReplaceLoadedOnes() {
    let mut config = Config {
        log_level: LogLevel::Debug,
        ..Config::default()
    };

    config.apply_overrides(Some(PathBuf::from("site/docs")), Some(LogLevel::Warn));

    assert_eq!(config.docs_root, PathBuf::from("site/docs"));
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Warn);
}

/// Test that absent overrides keep the loaded values
#[test]
fn test_apply_overrides_withNone_shouldKeepLoadedValues() {
    let mut config = Config {
        docs_root: PathBuf::from("docs"),
        log_level: LogLevel::Error,
        ..Config::default()
    };

    config.apply_overrides(None, None);

    assert_eq!(config.docs_root, PathBuf::from("docs"));
    assert_eq!(config.log_level, LogLevel::Error);
}
