/*!
 * Error types for the doc-translate application.
 *
 * Per-file failures are typed so the controller can report them and keep
 * going; configuration problems abort the run before any file is touched.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing a single document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be read or is not valid UTF-8
    #[error("Failed to read {path:?}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The translated content could not be written back
    #[error("Failed to write {path:?}: {source}")]
    Write {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A target path does not exist
    #[error("Not found: {0:?}")]
    NotFound(PathBuf),
}

/// Errors raised by configuration validation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Extension is empty or otherwise unusable
    #[error("Invalid file extension: {0:?}")]
    InvalidExtension(String),

    /// A configured target escapes the docs root
    #[error("Target must be a relative path inside the docs root: {0:?}")]
    InvalidTarget(String),

    /// The docs root is missing
    #[error("Documentation directory not found: {0:?}")]
    DocsRootNotFound(PathBuf),
}
