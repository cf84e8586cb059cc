/// Paragraph block type.
///
/// Paragraphs have no opening marker - they are the default block when no
/// other kind claims a line. Their lines, like quote and list lines, are
/// joined with spaces, and a line ending in two or more whitespace
/// characters forces a hard break.
pub struct Paragraph;

impl Paragraph {
    /// Paragraph start tag; never closed.
    pub const OPEN: &'static str = "<p>";
    pub const HARD_BREAK: &'static str = "<br>";

    /// Whether `line` ends in at least two ASCII whitespace characters.
    pub fn ends_with_hard_break(line: &str) -> bool {
        matches!(
            line.as_bytes(),
            [.., a, b] if a.is_ascii_whitespace() && b.is_ascii_whitespace()
        )
    }
}
