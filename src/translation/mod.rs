/*!
 * Dictionary-driven translation of markdown documents.
 *
 * This module contains the line-oriented substitution pipeline:
 *
 * - `phrases`: Ordered literal phrase table
 * - `patterns`: Ordered sentence pattern rules
 * - `classifier`: Fence, heading, masked and prose line detection
 * - `masking`: Link, inline code and URL span masking
 * - `core`: Document translator threading fence state through a file
 */

// Re-export main types for easier usage
pub use self::classifier::{classify, LineKind};
pub use self::core::{DocumentTranslator, TranslatedDocument};
pub use self::patterns::{PatternRule, PatternTable, PATTERN_TABLE};
pub use self::phrases::{PhraseEntry, PhraseTable, PHRASE_TABLE};

// Submodules
pub mod classifier;
pub mod core;
pub mod masking;
pub mod patterns;
pub mod phrases;
