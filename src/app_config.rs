use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Component, Path, PathBuf};

use crate::errors::ConfigError;

/// Application configuration module
/// This module handles loading, validating and saving the set of
/// documentation targets the translator walks.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Root of the documentation tree
    #[serde(default = "default_docs_root")]
    pub docs_root: PathBuf,

    /// Files directly under the docs root, processed first and in order
    #[serde(default = "default_root_files")]
    pub root_files: Vec<String>,

    /// Sub-directories of the docs root, each listed non-recursively
    #[serde(default = "default_directories")]
    pub directories: Vec<String>,

    /// Extension of the files to translate
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_docs_root() -> PathBuf {
    PathBuf::from("hypnoscript-docs").join("docs")
}

fn default_root_files() -> Vec<String> {
    ["index.md", "intro.md"].iter().map(|s| s.to_string()).collect()
}

fn default_directories() -> Vec<String> {
    [
        "builtins",
        "cli",
        "debugging",
        "development",
        "error-handling",
        "examples",
        "reference",
        "tutorial-basics",
        "tutorial-extras",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_extension() -> String {
    "md".to_string()
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            docs_root: default_docs_root(),
            root_files: default_root_files(),
            directories: default_directories(),
            extension: default_extension(),
            log_level: LogLevel::default(),
        }
    }
}

// A target must stay below the docs root
fn is_contained_relative(target: &str) -> bool {
    let path = Path::new(target);
    !target.is_empty()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

impl Config {
    /// Load the configuration from `path`, writing a default one when missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;
            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            return Ok(config);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());

        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn apply_overrides(&mut self, docs_root: Option<PathBuf>, log_level: Option<LogLevel>) {
        if let Some(docs_root) = docs_root {
            self.docs_root = docs_root;
        }
        if let Some(log_level) = log_level {
            self.log_level = log_level;
        }
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let extension = self.extension.trim_start_matches('.');
        if extension.is_empty() || extension.contains(['/', '\\']) {
            return Err(ConfigError::InvalidExtension(self.extension.clone()));
        }

        if let Some(target) = self
            .root_files
            .iter()
            .chain(self.directories.iter())
            .find(|target| !is_contained_relative(target))
        {
            return Err(ConfigError::InvalidTarget(target.clone()));
        }

        Ok(())
    }

    /// Absolute-or-relative paths of the configured root files
    pub fn root_file_paths(&self) -> Vec<PathBuf> {
        self.root_files.iter().map(|f| self.docs_root.join(f)).collect()
    }

    /// Paths of the configured sub-directories
    pub fn directory_paths(&self) -> Vec<PathBuf> {
        self.directories.iter().map(|d| self.docs_root.join(d)).collect()
    }
}
