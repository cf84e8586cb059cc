/// Code span inline type with owned delimiter constant.
///
/// Code spans are atomic - no other inline parsing occurs inside them. A
/// single whitespace character just inside each delimiter run is dropped.
pub struct CodeSpan;

/// A matched code span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSpanMatch<'a> {
    /// Bytes consumed, delimiters included.
    pub len: usize,
    /// The literal code, padding whitespace removed.
    pub content: &'a str,
}

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Matches a code span delimited by `ticks` backticks at the start of `s`.
    ///
    /// The shortest content that is followed by an optional whitespace
    /// character and the closing run wins. Single-tick content may not
    /// contain a backtick; double-tick content may.
    pub fn parse(s: &str, ticks: usize) -> Option<CodeSpanMatch<'_>> {
        let bytes = s.as_bytes();
        if bytes.len() < ticks || !bytes[..ticks].iter().all(|b| *b == Self::TICK) {
            return None;
        }
        let body = &s[ticks..];

        let padded = body
            .chars()
            .next()
            .filter(|c| c.is_ascii_whitespace())
            .map(char::len_utf8);
        if let Some(pad) = padded
            && let Some(m) = Self::scan(body, pad, ticks)
        {
            return Some(m.offset(ticks));
        }
        Self::scan(body, 0, ticks).map(|m| m.offset(ticks))
    }

    fn scan(body: &str, start: usize, ticks: usize) -> Option<CodeSpanMatch<'_>> {
        for (offset, ch) in body[start..].char_indices() {
            if ticks == 1 && ch == char::from(Self::TICK) {
                return None;
            }
            let end = start + offset + ch.len_utf8();
            let after = &body[end..];
            if Self::closes(after, ticks) {
                return Some(CodeSpanMatch {
                    len: end + ticks,
                    content: &body[start..end],
                });
            }
            if let Some(ws) = after.chars().next().filter(|c| c.is_ascii_whitespace())
                && Self::closes(&after[ws.len_utf8()..], ticks)
            {
                return Some(CodeSpanMatch {
                    len: end + ws.len_utf8() + ticks,
                    content: &body[start..end],
                });
            }
        }
        None
    }

    fn closes(s: &str, ticks: usize) -> bool {
        s.as_bytes()
            .get(..ticks)
            .is_some_and(|run| run.iter().all(|b| *b == Self::TICK))
    }
}

impl CodeSpanMatch<'_> {
    fn offset(self, by: usize) -> Self {
        Self {
            len: self.len + by,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(s: &str, ticks: usize) -> Option<(&str, usize)> {
        CodeSpan::parse(s, ticks).map(|m| (m.content, m.len))
    }

    #[test]
    fn single_tick() {
        assert_eq!(content("`code` rest", 1), Some(("code", 6)));
    }

    #[test]
    fn padding_is_dropped() {
        assert_eq!(content("` code `", 1), Some(("code", 8)));
    }

    #[test]
    fn double_tick_may_contain_a_tick() {
        assert_eq!(content("``a`b``", 2), Some(("a`b", 7)));
    }

    #[test]
    fn single_tick_cannot_span_a_tick() {
        assert_eq!(content("``a`b``", 1), None);
    }

    #[test]
    fn shortest_content_wins() {
        assert_eq!(content("`a` and `b`", 1), Some(("a", 3)));
    }

    #[test]
    fn unclosed_is_none() {
        assert_eq!(content("`open", 1), None);
        assert_eq!(content("``open`", 2), None);
    }

    #[test]
    fn lone_space_between_double_ticks() {
        assert_eq!(content("`` ``", 2), Some((" ", 5)));
    }
}
