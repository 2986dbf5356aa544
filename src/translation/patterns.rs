/*!
 * Sentence pattern rules.
 *
 * Each rule rewrites a German clause shape into its English counterpart,
 * carrying the first capture group through. The capture class is a broad
 * `[\w\s]+`, so a rule can run across clause boundaries on long lines
 * without punctuation.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Built-in sentence patterns, in application order
const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    (r"Die ([\w\s]+) ist", "The ${1} is"),
    (r"Das ([\w\s]+) ist", "The ${1} is"),
    (r"Der ([\w\s]+) ist", "The ${1} is"),
    (r"Ein ([\w\s]+) ist", "A ${1} is"),
    (r"Eine ([\w\s]+) ist", "A ${1} is"),
];

/// Process-wide pattern table built from the built-in rules
pub static PATTERN_TABLE: Lazy<PatternTable> = Lazy::new(|| {
    PatternTable::new(
        BUILTIN_PATTERNS
            .iter()
            .map(|(pattern, replacement)| {
                PatternRule::new(pattern, replacement).expect("Invalid sentence pattern regex")
            })
            .collect(),
    )
});

/// A regex rule with a replacement template referencing group 1
#[derive(Debug, Clone)]
pub struct PatternRule {
    regex: Regex,
    replacement: String,
}

impl PatternRule {
    /// Compile a rule
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            replacement: replacement.to_string(),
        })
    }

    /// Rewrite every match in `text`
    pub fn apply(&self, text: &str) -> String {
        self.regex
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}

/// Ordered list of pattern rules
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    rules: Vec<PatternRule>,
}

impl PatternTable {
    /// Build a table keeping rule order
    pub fn new(rules: Vec<PatternRule>) -> Self {
        Self { rules }
    }

    /// The built-in table
    pub fn builtin() -> &'static PatternTable {
        &PATTERN_TABLE
    }

    /// Rules in application order
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Apply every rule in order, each to the previous rule's output
    pub fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |current, rule| rule.apply(&current))
    }
}
