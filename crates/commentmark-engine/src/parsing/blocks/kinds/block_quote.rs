/// Blockquote block type with owned delimiter constant.
///
/// Only a single level of quoting exists; the marker must be followed by a
/// space, and whatever follows is the quoted text.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote line prefix.
    pub const PREFIX: &'static str = "> ";

    /// Returns the quoted text if `line` starts with [`Self::PREFIX`].
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}
