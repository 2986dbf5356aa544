use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::{ConfigError, DocumentError};
use crate::file_utils::{DocumentWriter, FileManager};
use crate::translation::DocumentTranslator;

// @module: Application controller for documentation translation

/// What happened to a single file
#[derive(Debug)]
pub enum FileStatus {
    /// Translated and written back
    Translated,
    /// Translated in memory only (dry run)
    WouldTranslate,
    /// Could not be read or decoded
    ReadFailed(DocumentError),
    /// Translated but could not be written
    WriteFailed(DocumentError),
}

/// Per-file outcome of a run
#[derive(Debug)]
pub struct FileReport {
    /// File that was processed
    pub path: PathBuf,
    /// Outcome
    pub status: FileStatus,
    /// Lines whose text changed (zero on read failure)
    pub changed_lines: usize,
}

impl FileReport {
    /// Whether the file counts towards the success total
    pub fn is_success(&self) -> bool {
        matches!(self.status, FileStatus::Translated | FileStatus::WouldTranslate)
    }
}

/// Summary of a whole run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Reports in processing order
    pub reports: Vec<FileReport>,
    /// Whether the run was a dry run
    pub dry_run: bool,
}

impl RunSummary {
    /// Number of files processed successfully
    pub fn success_count(&self) -> usize {
        self.reports.iter().filter(|r| r.is_success()).count()
    }

    /// Number of files that failed
    pub fn failure_count(&self) -> usize {
        self.reports.len() - self.success_count()
    }

    /// Human-readable closing line
    pub fn summary_message(&self) -> String {
        if self.dry_run {
            format!("Would translate {} files", self.success_count())
        } else {
            format!("Successfully translated {} files", self.success_count())
        }
    }
}

/// Main application controller for documentation translation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Line-level translator
    translator: DocumentTranslator<'static>,
    // @field: Where translated documents go
    writer: Box<dyn DocumentWriter>,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Self::with_writer(config, Box::new(FileManager))
    }

    // @method: Create a controller that hands translated documents to `writer`
    pub fn with_writer(config: Config, writer: Box<dyn DocumentWriter>) -> Result<Self> {
        config.validate()?;

        let translator = DocumentTranslator::default();
        debug!(
            "Using {} phrase entries and {} pattern rules",
            translator.phrases().entries().len(),
            translator.patterns().rules().len()
        );

        Ok(Self {
            config,
            translator,
            writer,
        })
    }

    /// Collect the configured targets: root files first, then each directory
    pub fn collect_configured_files(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let docs_root = &self.config.docs_root;
        if !FileManager::dir_exists(docs_root) {
            return Err(ConfigError::DocsRootNotFound(docs_root.clone()));
        }

        let mut files: Vec<PathBuf> = self
            .config
            .root_file_paths()
            .into_iter()
            .filter(|path| FileManager::file_exists(path))
            .collect();
        debug!("Found {} root files in {}", files.len(), docs_root.display());

        for directory in self.config.directory_paths() {
            files.extend(self.list_directory(&directory));
        }

        Ok(files)
    }

    /// Collect files from explicit paths.
    ///
    /// Directories are listed like configured ones. Files must carry the
    /// configured extension; others are skipped with a warning.
    pub fn collect_files_from_paths(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for path in paths {
            if FileManager::dir_exists(path) {
                files.extend(self.list_directory(path));
            } else if FileManager::has_extension(path, &self.config.extension) {
                // Missing files are kept so the run reports them as read failures
                files.push(path.clone());
            } else {
                warn!(
                    "Skipping {}: not a .{} file",
                    path.display(),
                    self.config.extension.trim_start_matches('.')
                );
            }
        }

        files
    }

    // Missing or unreadable directories contribute nothing
    fn list_directory(&self, directory: &Path) -> Vec<PathBuf> {
        match FileManager::find_files(directory, &self.config.extension) {
            Ok(files) => {
                debug!("Found {} files in {}", files.len(), directory.display());
                files
            }
            Err(DocumentError::NotFound(_)) => {
                warn!("Directory not found: {}", directory.display());
                Vec::new()
            }
            Err(e) => {
                error!("Failed to list {}: {}", directory.display(), e);
                Vec::new()
            }
        }
    }

    /// Run over the configured targets
    pub fn run(&self, dry_run: bool) -> Result<RunSummary> {
        let files = self.collect_configured_files()?;
        Ok(self.run_files(&files, dry_run))
    }

    /// Run over explicit paths
    pub fn run_paths(&self, paths: &[PathBuf], dry_run: bool) -> RunSummary {
        let files = self.collect_files_from_paths(paths);
        self.run_files(&files, dry_run)
    }

    /// Translate each file in order; failures are recorded, never fatal
    pub fn run_files(&self, files: &[PathBuf], dry_run: bool) -> RunSummary {
        if dry_run {
            info!("DRY RUN MODE - No files will be modified");
        }
        info!("Processing {} files", files.len());

        let progress = ProgressBar::new(files.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("[{bar:40}] {pos}/{len} {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress.set_style(style.progress_chars("=>-"));

        let mut summary = RunSummary {
            reports: Vec::with_capacity(files.len()),
            dry_run,
        };

        for file in files {
            let file_name = file
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| file.display().to_string());
            progress.set_message(file_name);

            summary.reports.push(self.process_file(file, dry_run));
            progress.inc(1);
        }

        progress.finish_and_clear();

        info!(
            "{} ({} failed)",
            summary.summary_message(),
            summary.failure_count()
        );

        summary
    }

    /// Translate a single file and write it back unless `dry_run`
    pub fn process_file(&self, path: &Path, dry_run: bool) -> FileReport {
        let translated = match self.translator.translate_file(path) {
            Ok(translated) => translated,
            Err(e) => {
                error!("{}", e);
                return FileReport {
                    path: path.to_path_buf(),
                    status: FileStatus::ReadFailed(e),
                    changed_lines: 0,
                };
            }
        };

        let changed_lines = translated.changed_lines;
        if !translated.is_changed() {
            debug!("No German fragments found in {}", path.display());
        }

        if dry_run {
            info!(
                "Would translate {}: {} of {} lines changed",
                path.display(),
                changed_lines,
                translated.total_lines
            );
            return FileReport {
                path: path.to_path_buf(),
                status: FileStatus::WouldTranslate,
                changed_lines,
            };
        }

        let status = match self.writer.write(path, &translated.content) {
            Ok(()) => {
                info!("Translated {}: {} lines changed", path.display(), changed_lines);
                FileStatus::Translated
            }
            Err(e) => {
                error!("{}", e);
                FileStatus::WriteFailed(e)
            }
        };

        FileReport {
            path: path.to_path_buf(),
            status,
            changed_lines,
        }
    }
}
