/*!
 * # doc-translate - Dictionary-driven German to English documentation rewriting
 *
 * A Rust library for replacing German fragments in markdown documentation
 * with their English equivalents from a fixed, ordered dictionary.
 *
 * ## Features
 *
 * - Ordered literal phrase substitution
 * - Sentence pattern rules with capture groups for plain prose
 * - Fenced code blocks passed through untouched
 * - Links, inline code and bare URLs masked from substitution
 * - Line terminators and line count preserved exactly
 * - Dry-run mode that never writes
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `translation`: The substitution pipeline:
 *   - `translation::phrases`: Ordered phrase table
 *   - `translation::patterns`: Sentence pattern rules
 *   - `translation::classifier`: Line classification
 *   - `translation::masking`: Span masking
 *   - `translation::core`: Document translator
 * - `file_utils`: File system operations
 * - `app_controller`: Target collection and per-file processing
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, FileReport, FileStatus, RunSummary};
pub use errors::{ConfigError, DocumentError};
pub use translation::{DocumentTranslator, PatternTable, PhraseTable, TranslatedDocument};
