use crate::parsing::inline::PLACEHOLDER;

/// Emphasis delimiter characters, each with its own boundary rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Star,
    Underscore,
}

/// How many delimiters wrap the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    /// `***x***`
    BoldItalic,
    /// `**x**`
    Bold,
    /// `*x*`
    Italic,
}

/// A matched emphasis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmphasisMatch<'a> {
    pub content: &'a str,
    /// Bytes consumed, both delimiter runs included.
    pub len: usize,
}

impl Strength {
    /// Tried in this order: a longer run must never be read as nested
    /// shorter ones.
    pub const ORDER: [Strength; 3] = [Strength::BoldItalic, Strength::Bold, Strength::Italic];

    pub fn run_len(self) -> usize {
        match self {
            Strength::BoldItalic => 3,
            Strength::Bold => 2,
            Strength::Italic => 1,
        }
    }

    pub fn open_tag(self) -> &'static str {
        match self {
            Strength::BoldItalic => "<b><i>",
            Strength::Bold => "<b>",
            Strength::Italic => "<i>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            Strength::BoldItalic => "</i></b>",
            Strength::Bold => "</b>",
            Strength::Italic => "</i>",
        }
    }
}

impl Emphasis {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'*' => Some(Emphasis::Star),
            b'_' => Some(Emphasis::Underscore),
            _ => None,
        }
    }

    pub fn delimiter(self) -> u8 {
        match self {
            Emphasis::Star => b'*',
            Emphasis::Underscore => b'_',
        }
    }

    /// Characters allowed as the first and last character of the content.
    ///
    /// Underscores only accept alphanumerics so `snake_case_names` never
    /// turn italic.
    fn is_boundary(self, b: u8) -> bool {
        b == PLACEHOLDER as u8
            || b.is_ascii_alphanumeric()
            || (self == Emphasis::Star && b == b'_')
    }

    /// Characters that may not directly follow the closing run.
    fn blocks_close(self, b: u8) -> bool {
        b == PLACEHOLDER as u8
            || b.is_ascii_alphanumeric()
            || b == b'_'
            || (self == Emphasis::Star && b == b'*')
    }

    /// Matches `strength` at the start of `s`.
    ///
    /// The content must start and end with a boundary character, and the
    /// closing run must not be followed by a character that could continue
    /// it. The farthest closing run that satisfies this wins, so
    /// `*a* b *c*` is one span.
    pub fn parse(self, s: &str, strength: Strength) -> Option<EmphasisMatch<'_>> {
        let n = strength.run_len();
        let d = self.delimiter();
        let bytes = s.as_bytes();
        let is_run = |at: usize| {
            bytes
                .get(at..at + n)
                .is_some_and(|run| run.iter().all(|b| *b == d))
        };

        if !is_run(0) || !bytes.get(n).is_some_and(|b| self.is_boundary(*b)) {
            return None;
        }
        (n + 1..bytes.len())
            .rev()
            .find(|&close| {
                is_run(close)
                    && self.is_boundary(bytes[close - 1])
                    && !bytes.get(close + n).is_some_and(|b| self.blocks_close(*b))
            })
            .map(|close| EmphasisMatch {
                content: &s[n..close],
                len: close + n,
            })
    }
}
