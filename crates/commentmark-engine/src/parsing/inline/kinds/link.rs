/// A `[...]` group at the start of the input: link text, image alt text or
/// a reference label. The inside is at least one character and never
/// contains `]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracketed<'a> {
    pub inner: &'a str,
    /// Bytes consumed, brackets included.
    pub len: usize,
}

impl Bracketed<'_> {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    /// Prefix that turns a link into an image.
    pub const IMAGE: u8 = b'!';
    /// The empty label of an implicit reference link, `[label][]`.
    pub const EMPTY: &'static str = "[]";

    pub fn parse(s: &str) -> Option<Bracketed<'_>> {
        let rest = s.strip_prefix(char::from(Self::OPEN))?;
        let close = rest.find(char::from(Self::CLOSE))?;
        if close == 0 {
            return None;
        }
        Some(Bracketed {
            inner: &rest[..close],
            len: close + 2,
        })
    }
}

/// The `(destination "title")` part of an inline link or image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineTarget<'a> {
    pub destination: &'a str,
    pub title: Option<&'a str>,
    /// Bytes consumed, parentheses included.
    pub len: usize,
}

impl InlineTarget<'_> {
    pub const OPEN: u8 = b'(';
    pub const CLOSE: u8 = b')';

    /// Parses `(destination)` or `(destination title)` at the start of `s`.
    ///
    /// The destination is a run of characters other than whitespace and
    /// `)`. Anything after whitespace up to the first `)` is the title; one
    /// pair of surrounding `"` or `'` quotes is removed from it.
    pub fn parse(s: &str) -> Option<InlineTarget<'_>> {
        let rest = s.strip_prefix(char::from(Self::OPEN))?;
        let dest_len = rest
            .find(|c: char| c.is_ascii_whitespace() || c == char::from(Self::CLOSE))
            .unwrap_or(rest.len());
        if dest_len == 0 {
            return None;
        }
        let destination = &rest[..dest_len];
        let after = &rest[dest_len..];
        let close = after.find(char::from(Self::CLOSE))?;
        let title_part = &after[..close];
        if !title_part.is_empty() && !title_part.starts_with(|c: char| c.is_ascii_whitespace()) {
            return None;
        }
        Some(InlineTarget {
            destination,
            title: unquote(title_part.trim_ascii()),
            len: 1 + dest_len + close + 1,
        })
    }
}

fn unquote(title: &str) -> Option<&str> {
    if title.is_empty() {
        return None;
    }
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| title.strip_prefix(*q)?.strip_suffix(*q))
        .unwrap_or(title);
    Some(unquoted)
}
