use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::DocumentError;

// @module: File and directory utilities

/// Destination for translated documents
pub trait DocumentWriter {
    /// Replace the content of `path` with `content`
    fn write(&self, path: &Path, content: &str) -> Result<(), DocumentError>;
}

// @struct: File operations utility
pub struct FileManager;

impl DocumentWriter for FileManager {
    fn write(&self, path: &Path, content: &str) -> Result<(), DocumentError> {
        Self::write_to_file(path, content)
    }
}

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_dir()
    }

    /// Whether `path` has `extension`, ignoring case and a leading dot
    pub fn has_extension<P: AsRef<Path>>(path: P, extension: &str) -> bool {
        let wanted = extension.trim_start_matches('.');
        path.as_ref()
            .extension()
            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(wanted))
    }

    /// Find files with a specific extension directly inside a directory.
    ///
    /// Sub-directories are not descended into. Results are sorted by file
    /// name so repeated runs visit files in the same order.
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>, DocumentError> {
        let dir = dir.as_ref();
        if !Self::dir_exists(dir) {
            return Err(DocumentError::NotFound(dir.to_path_buf()));
        }

        let mut result = Vec::new();
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| DocumentError::Read {
                path: dir.to_path_buf(),
                source: e.into(),
            })?;
            let path = entry.path();

            if path.is_file() && Self::has_extension(path, extension) {
                result.push(path.to_path_buf());
            }
        }

        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String, DocumentError> {
        let path = path.as_ref();
        fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write a string to an existing file in place
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<(), DocumentError> {
        let path = path.as_ref();
        fs::write(path, content).map_err(|source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
