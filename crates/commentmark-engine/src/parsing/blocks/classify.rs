use xi_rope::Rope;

use crate::parsing::rope::{lines::LineRef, lines_with_spans, span::Span};

use super::kinds::{
    BlockQuote, CodeFence, IndentedCode, ListMarker, ListStyle, ReferenceDefinition, ReplyHeader,
    Separator,
};

/// What a single line is, judged without looking at its neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace only.
    Blank,
    /// A horizontal rule.
    Separator,
    /// `1. text`
    NumberedItem { text: String },
    /// `- text`, `* text` or `+ text`
    BulletedItem { text: String },
    /// `> text`
    Quote { text: String },
    /// `[label]: destination "title"`
    ReferenceDefinition(ReferenceDefinition),
    /// `Re #5: text`
    ReplyHeader { target: String, text: String },
    /// `~~~~` with whatever trails it on the fence line.
    CodeFence { info: String },
    /// Anything else. `indent` counts leading whitespace characters and
    /// `text` is the line with that whitespace removed.
    Text { indent: usize, text: String },
    /// Synthetic record appended after the last real line.
    EndOfInput,
}

/// A classified line: its kind plus the raw text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// Byte span of the physical line (empty for [`LineKind::EndOfInput`]).
    pub span: Span,
    /// Line text without its line ending.
    pub raw: String,
    pub kind: LineKind,
}

impl LineRecord {
    fn end_of_input(at: usize) -> Self {
        Self {
            span: Span { start: at, end: at },
            raw: String::new(),
            kind: LineKind::EndOfInput,
        }
    }

    /// Whether this is a text line indented far enough to be code.
    pub fn is_indented_code(&self) -> bool {
        matches!(
            self.kind,
            LineKind::Text { indent, .. } if IndentedCode::qualifies(indent)
        )
    }
}

/// Classifies individual lines for the block parsing phase.
///
/// Rules are tried in a fixed order and the first match wins; a line that
/// matches an earlier rule is never considered by a later one.
pub struct CommentLineClassifier;

impl CommentLineClassifier {
    /// Classifies one line into a [`LineRecord`].
    pub fn classify(&self, lr: &LineRef) -> LineRecord {
        let raw = lr.content();
        LineRecord {
            span: lr.span,
            raw: raw.to_string(),
            kind: Self::kind_of(raw),
        }
    }

    /// Classifies every line of `rope` and appends the end-of-input record.
    pub fn classify_all(&self, rope: &Rope) -> Vec<LineRecord> {
        let mut records: Vec<LineRecord> = lines_with_spans(rope)
            .map(|lr| self.classify(&lr))
            .collect();
        records.push(LineRecord::end_of_input(rope.len()));
        records
    }

    fn kind_of(raw: &str) -> LineKind {
        if raw.trim_ascii().is_empty() {
            return LineKind::Blank;
        }
        if Separator::matches(raw) {
            return LineKind::Separator;
        }
        if let Some((style, text)) = ListMarker::parse(raw) {
            let text = text.to_string();
            return match style {
                ListStyle::Numbered => LineKind::NumberedItem { text },
                ListStyle::Bulleted => LineKind::BulletedItem { text },
            };
        }
        if let Some(text) = BlockQuote::strip_prefix(raw) {
            return LineKind::Quote {
                text: text.to_string(),
            };
        }
        if let Some(def) = ReferenceDefinition::parse(raw) {
            return LineKind::ReferenceDefinition(def);
        }
        if let Some((target, text)) = ReplyHeader::parse(raw) {
            return LineKind::ReplyHeader {
                target,
                text: text.to_string(),
            };
        }
        if let Some(info) = CodeFence::sig(raw) {
            return LineKind::CodeFence {
                info: info.to_string(),
            };
        }

        let text = raw.trim_start_matches(|c: char| c.is_ascii_whitespace());
        LineKind::Text {
            indent: raw.len() - text.len(),
            text: text.to_string(),
        }
    }
}
