/*!
 * Span masking for lines that carry links, inline code or bare URLs.
 *
 * One alternation regex walks the line left to right. Matches are masked and
 * copied through; the gaps between them are handed to a rewrite closure.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Markdown link, inline code span, or bare URL
static MASKED_SPAN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[.*?\]\(.*?\)|`.*?`|https?://\S+").expect("Invalid masked span regex")
});

/// A slice of a line, either protected or open to substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// Link, code span or URL; never rewritten
    Masked(&'a str),
    /// Text between masked spans
    Text(&'a str),
}

/// Split a line into alternating text and masked spans, in order.
///
/// Empty text gaps are skipped, so concatenating the spans yields the line.
pub fn split_spans(line: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut last_end = 0;

    for found in MASKED_SPAN_REGEX.find_iter(line) {
        if found.start() > last_end {
            spans.push(Span::Text(&line[last_end..found.start()]));
        }
        spans.push(Span::Masked(found.as_str()));
        last_end = found.end();
    }

    if last_end < line.len() {
        spans.push(Span::Text(&line[last_end..]));
    }

    spans
}

/// Rewrite the unmasked parts of `line` with `rewrite`, keeping masked spans
pub fn rewrite_unmasked<F>(line: &str, mut rewrite: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut result = String::with_capacity(line.len());

    for span in split_spans(line) {
        match span {
            Span::Masked(text) => result.push_str(text),
            Span::Text(text) => result.push_str(&rewrite(text)),
        }
    }

    result
}
