/// Explicit code fence: a line starting with four tildes opens and closes a
/// raw code block. Text after the marker on the fence line is kept on the
/// line record but never rendered.
pub struct CodeFence;

impl CodeFence {
    pub const MARKER: &'static str = "~~~~";

    /// Returns the trailing text after the marker if `line` is a fence.
    pub fn sig(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKER)
    }
}

/// Indented code: text lines with at least [`IndentedCode::INDENT`] leading
/// whitespace characters.
pub struct IndentedCode;

impl IndentedCode {
    pub const INDENT: usize = 4;

    /// Whether a text line with `indent` leading whitespace is code.
    pub fn qualifies(indent: usize) -> bool {
        indent >= Self::INDENT
    }

    /// Drops the indent from a raw line.
    ///
    /// Callers only pass lines that qualified, so the first `INDENT` bytes
    /// are single-byte whitespace.
    pub fn dedent(raw: &str) -> &str {
        raw.get(Self::INDENT..).unwrap_or_default()
    }
}
