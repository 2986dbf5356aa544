/*!
 * Line classification for markdown documents.
 *
 * Decides which substitution strategy applies to a line given whether the
 * scanner currently sits inside a fenced code block.
 */

/// Prefix that opens or closes a fenced code block
pub const FENCE_MARKER: &str = "```";

/// Prefix of an ATX heading
const HEADING_MARKER: char = '#';

/// Substrings that send a line through span masking: URL schemes, inline
/// code, the source host, and the project's script and markup extensions.
pub const MASK_TRIGGERS: &[&str] = &["http://", "https://", "`", "github.com", ".hyp", ".md"];

/// How a single line is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A line opening or closing a fenced block
    FenceMarker,
    /// A line between fence markers
    InsideFence,
    /// A heading without parentheses
    Heading,
    /// A line carrying links, code spans or URLs
    Masked,
    /// Anything else
    Prose,
}

impl LineKind {
    /// Fence flag after a line of this kind
    pub fn next_fence_state(self, in_fence: bool) -> bool {
        match self {
            Self::FenceMarker => !in_fence,
            _ => in_fence,
        }
    }
}

/// Whether `line` opens or closes a fenced block
pub fn is_fence_marker(line: &str) -> bool {
    line.trim().starts_with(FENCE_MARKER)
}

/// Classify a line.
///
/// Fence markers win over everything, including the current fence state, so
/// the closing marker of a block is recognised.
pub fn classify(line: &str, in_fence: bool) -> LineKind {
    if is_fence_marker(line) {
        return LineKind::FenceMarker;
    }

    if in_fence {
        return LineKind::InsideFence;
    }

    if line.trim().starts_with(HEADING_MARKER) && !line.contains('(') {
        return LineKind::Heading;
    }

    if MASK_TRIGGERS.iter().any(|marker| line.contains(marker)) {
        return LineKind::Masked;
    }

    LineKind::Prose
}
