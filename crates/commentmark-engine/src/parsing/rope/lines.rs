use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The line text as a string, line ending included.
    pub text: String,
}

impl LineRef {
    /// The line text without its `\n` and at most one trailing `\r`.
    pub fn content(&self) -> &str {
        let text = self.text.strip_suffix('\n').unwrap_or(&self.text);
        text.strip_suffix('\r').unwrap_or(text)
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to preserve newline characters, which is important for
/// accurate span tracking during block parsing.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        let len = line.len();
        offset += len;
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_cover_newlines() {
        let rope = Rope::from("one\ntwo");
        let lines: Vec<_> = lines_with_spans(&rope).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].span, Span { start: 0, end: 4 });
        assert_eq!(lines[1].span, Span { start: 4, end: 7 });
    }

    #[test]
    fn content_strips_crlf() {
        let rope = Rope::from("dos line\r\nnext");
        let first = lines_with_spans(&rope).next().unwrap();
        assert_eq!(first.content(), "dos line");
    }

    #[test]
    fn content_strips_only_one_carriage_return() {
        let line = LineRef {
            span: Span { start: 0, end: 4 },
            text: "a\r\r\n".to_string(),
        };
        assert_eq!(line.content(), "a\r");
    }
}
