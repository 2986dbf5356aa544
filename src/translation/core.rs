/*!
 * Core document translation.
 *
 * `DocumentTranslator` ties the phrase table, the pattern table, the line
 * classifier and span masking together. It works line by line and threads
 * the fenced-block flag through a document.
 */

use std::path::Path;

use log::debug;

use crate::errors::DocumentError;
use crate::file_utils::FileManager;
use crate::translation::classifier::{self, LineKind};
use crate::translation::masking;
use crate::translation::patterns::PatternTable;
use crate::translation::phrases::PhraseTable;

/// Result of translating a whole document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedDocument {
    /// Translated text, same line count and terminators as the input
    pub content: String,

    /// Number of lines in the input
    pub total_lines: usize,

    /// Number of lines whose text changed
    pub changed_lines: usize,
}

impl TranslatedDocument {
    /// Whether translation changed anything
    pub fn is_changed(&self) -> bool {
        self.changed_lines > 0
    }
}

/// Rewrites German fragments in markdown text using ordered tables
#[derive(Debug, Clone, Copy)]
pub struct DocumentTranslator<'a> {
    phrases: &'a PhraseTable,
    patterns: &'a PatternTable,
}

impl Default for DocumentTranslator<'static> {
    fn default() -> Self {
        Self::new(PhraseTable::builtin(), PatternTable::builtin())
    }
}

impl<'a> DocumentTranslator<'a> {
    /// Create a translator over the given tables
    pub fn new(phrases: &'a PhraseTable, patterns: &'a PatternTable) -> Self {
        Self { phrases, patterns }
    }

    /// Phrase table in use
    pub fn phrases(&self) -> &PhraseTable {
        self.phrases
    }

    /// Pattern table in use
    pub fn patterns(&self) -> &PatternTable {
        self.patterns
    }

    /// Translate one line according to its kind
    pub fn translate_classified(&self, line: &str, kind: LineKind) -> String {
        match kind {
            LineKind::FenceMarker | LineKind::InsideFence => line.to_string(),
            LineKind::Heading => self.phrases.apply(line),
            LineKind::Masked => masking::rewrite_unmasked(line, |text| self.phrases.apply(text)),
            LineKind::Prose => {
                let substituted = self.phrases.apply(line);
                self.patterns.apply(&substituted)
            }
        }
    }

    /// Classify and translate one line given the current fence state
    pub fn translate_line(&self, line: &str, in_fence: bool) -> String {
        self.translate_classified(line, classifier::classify(line, in_fence))
    }

    /// Translate in-memory text, keeping every line terminator
    pub fn translate_text(&self, text: &str) -> TranslatedDocument {
        let mut content = String::with_capacity(text.len());
        let mut in_fence = false;
        let mut total_lines = 0;
        let mut changed_lines = 0;

        for line in text.split_inclusive('\n') {
            let kind = classifier::classify(line, in_fence);
            in_fence = kind.next_fence_state(in_fence);

            let translated = self.translate_classified(line, kind);
            if translated != line {
                changed_lines += 1;
            }

            content.push_str(&translated);
            total_lines += 1;
        }

        if in_fence {
            debug!("Document ends inside an unclosed fenced block");
        }

        TranslatedDocument {
            content,
            total_lines,
            changed_lines,
        }
    }

    /// Read a UTF-8 file and translate its content.
    ///
    /// Nothing is written; the caller decides what to do with the result.
    pub fn translate_file<P: AsRef<Path>>(&self, path: P) -> Result<TranslatedDocument, DocumentError> {
        let text = FileManager::read_to_string(path)?;
        Ok(self.translate_text(&text))
    }
}
