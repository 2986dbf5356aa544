/*!
 * Integration tests for whole documentation runs
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use anyhow::Result;
use doc_translate::app_controller::{Controller, FileStatus};
use doc_translate::errors::{ConfigError, DocumentError};
use doc_translate::file_utils::{DocumentWriter, FileManager};
use doc_translate::Config;
use crate::common;

/// Writes through to disk except for one path, which is refused
struct RefusingWriter {
    refused: PathBuf,
}

impl DocumentWriter for RefusingWriter {
    fn write(&self, path: &Path, content: &str) -> Result<(), DocumentError> {
        if path == self.refused {
            return Err(DocumentError::Write {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only file"),
            });
        }
        FileManager.write(path, content)
    }
}

fn snapshot(paths: &[PathBuf]) -> Result<Vec<Vec<u8>>> {
    Ok(paths.iter().map(fs::read).collect::<std::io::Result<Vec<_>>>()?)
}

/// Root files come first, then each directory in name order, top level only
#[test]
fn test_collect_configured_files_shouldFollowConfiguredOrder() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::create_docs_tree(temp_dir.path())?;
    let docs = config.docs_root.clone();
    let controller = Controller::with_config(config)?;

    let files = controller.collect_configured_files()?;

    assert_eq!(
        files,
        vec![docs.join("intro.md"), docs.join("cli/a.md"), docs.join("cli/b.md")]
    );

    Ok(())
}

/// A full run translates and writes every collected file
#[test]
fn test_run_withWritableTree_shouldTranslateInPlace() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::create_docs_tree(temp_dir.path())?;
    let docs = config.docs_root.clone();
    let controller = Controller::with_config(config)?;

    let summary = controller.run(false)?;

    assert_eq!(summary.success_count(), 3);
    assert_eq!(summary.failure_count(), 0);
    assert_eq!(summary.summary_message(), "Successfully translated 3 files");
    assert!(summary.reports.iter().all(|r| matches!(r.status, FileStatus::Translated)));

    assert_eq!(fs::read_to_string(docs.join("intro.md"))?, common::SAMPLE_PAGE_TRANSLATED);
    assert_eq!(fs::read_to_string(docs.join("cli/a.md"))?, "## Usage\n");
    assert_eq!(fs::read_to_string(docs.join("cli/b.md"))?, "Sum\n");
    assert_eq!(fs::read_to_string(docs.join("cli/notes.txt"))?, "Summe\n");
    assert_eq!(fs::read_to_string(docs.join("cli/nested/deep.md"))?, "Summe\n");

    Ok(())
}

/// A dry run leaves every file byte-for-byte unchanged
#[test]
fn test_run_withDryRun_shouldNotModifyAnyFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::create_docs_tree(temp_dir.path())?;
    let controller = Controller::with_config(config)?;
    let files = controller.collect_configured_files()?;
    let before = snapshot(&files)?;

    let summary = controller.run(true)?;

    assert_eq!(snapshot(&files)?, before);
    assert_eq!(summary.summary_message(), "Would translate 3 files");
    assert!(summary.reports.iter().all(|r| matches!(r.status, FileStatus::WouldTranslate)));
    assert_eq!(summary.reports[0].changed_lines, 4);

    Ok(())
}

/// A missing docs root aborts before touching anything
#[test]
fn test_run_withMissingDocsRoot_shouldError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = Config {
        docs_root: temp_dir.path().join("nowhere"),
        ..Config::default()
    };
    let controller = Controller::with_config(config)?;

    let result = controller.collect_configured_files();

    assert!(matches!(result, Err(ConfigError::DocsRootNotFound(_))));
    assert!(controller.run(true).is_err());

    Ok(())
}

/// An invalid configuration is rejected when building the controller
#[test]
fn test_with_config_withInvalidConfig_shouldError() {
    let config = Config {
        extension: String::new(),
        ..Config::default()
    };

    assert!(Controller::with_config(config).is_err());
}

/// A file that cannot be decoded is reported and the run continues
#[test]
fn test_run_withUndecodableFile_shouldReportAndContinue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::create_docs_tree(temp_dir.path())?;
    let docs = config.docs_root.clone();
    let broken = docs.join("cli/0-broken.md");
    fs::write(&broken, [0xc3, 0x28, 0x0a])?;
    let controller = Controller::with_config(config)?;

    let summary = controller.run(false)?;

    assert_eq!(summary.reports.len(), 4);
    assert_eq!(summary.success_count(), 3);
    assert_eq!(summary.failure_count(), 1);
    let failed = &summary.reports[1];
    assert_eq!(failed.path, broken);
    assert!(matches!(failed.status, FileStatus::ReadFailed(_)));
    assert_eq!(fs::read(&broken)?, vec![0xc3, 0x28, 0x0a]);
    assert_eq!(fs::read_to_string(docs.join("cli/b.md"))?, "Sum\n");

    Ok(())
}

/// A file that cannot be written is reported and the run continues
#[test]
fn test_run_withUnwritableFile_shouldReportAndContinue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::create_docs_tree(temp_dir.path())?;
    let docs = config.docs_root.clone();
    let refused = docs.join("cli/a.md");
    let controller = Controller::with_writer(config, Box::new(RefusingWriter { refused: refused.clone() }))?;

    let summary = controller.run(false)?;

    assert_eq!(summary.reports.len(), 3);
    assert_eq!(summary.success_count(), 2);
    assert_eq!(summary.failure_count(), 1);

    let failed = &summary.reports[1];
    assert_eq!(failed.path, refused);
    assert!(matches!(failed.status, FileStatus::WriteFailed(DocumentError::Write { .. })));
    assert_eq!(failed.changed_lines, 1);
    assert!(matches!(summary.reports[0].status, FileStatus::Translated));
    assert!(matches!(summary.reports[2].status, FileStatus::Translated));

    assert_eq!(fs::read_to_string(&refused)?, "## Verwendung\n");
    assert_eq!(fs::read_to_string(docs.join("intro.md"))?, common::SAMPLE_PAGE_TRANSLATED);
    assert_eq!(fs::read_to_string(docs.join("cli/b.md"))?, "Sum\n");

    Ok(())
}

/// Explicit paths replace the configured targets
#[test]
fn test_run_paths_withFileAndDirectory_shouldProcessOnlyThose() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::create_docs_tree(temp_dir.path())?;
    let docs = config.docs_root.clone();
    let controller = Controller::with_config(config)?;

    let summary = controller.run_paths(&[docs.join("cli/nested"), docs.join("cli/b.md")], false);

    assert_eq!(summary.success_count(), 2);
    assert_eq!(fs::read_to_string(docs.join("cli/nested/deep.md"))?, "Sum\n");
    assert_eq!(fs::read_to_string(docs.join("cli/b.md"))?, "Sum\n");
    assert_eq!(fs::read_to_string(docs.join("intro.md"))?, common::SAMPLE_PAGE);

    Ok(())
}

/// Empty files are processed successfully
#[test]
fn test_process_file_withEmptyFile_shouldSucceed() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "empty.md", "")?;
    let controller = Controller::with_config(Config::default())?;

    let report = controller.process_file(&path, false);

    assert!(report.is_success());
    assert_eq!(report.changed_lines, 0);
    assert_eq!(fs::read_to_string(&path)?, "");

    Ok(())
}

/// Explicit files without the configured extension are skipped
#[test]
fn test_run_paths_withOtherExtension_shouldSkipFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::create_docs_tree(temp_dir.path())?;
    let docs = config.docs_root.clone();
    let controller = Controller::with_config(config)?;
    let notes = docs.join("cli/notes.txt");
    let missing = docs.join("cli/missing.md");

    let files = controller.collect_files_from_paths(&[notes.clone(), missing.clone(), docs.join("cli/b.md")]);
    assert_eq!(files, vec![missing, docs.join("cli/b.md")]);

    let summary = controller.run_paths(&[notes.clone()], false);

    assert!(summary.reports.is_empty());
    assert_eq!(fs::read_to_string(&notes)?, "Summe\n");

    Ok(())
}
