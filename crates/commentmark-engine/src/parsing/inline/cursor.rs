/// A cursor for left-to-right inline scanning.
///
/// Indexes bytes, but [`Cursor::bump_char`] always advances over a whole
/// UTF-8 character so text copied through stays valid.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    s: &'a str,
    /// Current byte index into `s`.
    i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Peeks `n` bytes ahead of the current position.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// The unconsumed remainder.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or_default()
    }

    /// Advances over one character, returning it.
    pub fn bump_char(&mut self) -> Option<char> {
        let ch = self.rest().chars().next()?;
        self.i += ch.len_utf8();
        Some(ch)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
