use crate::html;
use crate::models::RenderedBlock;
use crate::parsing::inline::render_inline;
use crate::parsing::references::ReferenceTable;

use super::kinds::{ListStyle, Paragraph};

/// A reply back-reference: the thread-local anchor id and the comment
/// number shown to readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyTarget {
    /// `<context_id>-<target>`
    pub anchor: String,
    pub target: String,
}

impl ReplyTarget {
    pub fn new(context_id: &str, target: &str) -> Self {
        Self {
            anchor: format!("{context_id}-{target}"),
            target: target.to_string(),
        }
    }
}

/// Raw code lines, never inline-processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlock {
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphBlock {
    pub reply: Option<ReplyTarget>,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteBlock {
    pub lines: Vec<String>,
}

/// Items of a bulleted or numbered list, each an ordered run of lines.
///
/// An empty line inside an item marks a paragraph break that a blank line
/// before an indented continuation introduced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBlock {
    pub items: Vec<Vec<String>>,
    /// Tight until a blank line between or inside items loosens it.
    pub compact: bool,
}

/// A block element collected by the builder, not yet inline-processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Separator,
    Code(CodeBlock),
    Paragraph(ParagraphBlock),
    Quote(QuoteBlock),
    BulletedList(ListBlock),
    NumberedList(ListBlock),
}

impl CodeBlock {
    pub fn seeded(line: String) -> Self {
        Self { lines: vec![line] }
    }

    pub fn push_line(&mut self, line: String) {
        self.lines.push(line);
    }
}

impl ParagraphBlock {
    pub fn new(first: String) -> Self {
        Self {
            reply: None,
            lines: vec![first],
        }
    }

    /// A paragraph opened by `Re #N:`. An empty remainder seeds no line.
    pub fn reply(target: ReplyTarget, first: String) -> Self {
        Self {
            reply: Some(target),
            lines: if first.is_empty() { vec![] } else { vec![first] },
        }
    }

    pub fn push_line(&mut self, line: String) {
        self.lines.push(line);
    }
}

impl QuoteBlock {
    pub fn new(first: String) -> Self {
        Self { lines: vec![first] }
    }

    pub fn push_line(&mut self, line: String) {
        self.lines.push(line);
    }
}

impl ListBlock {
    pub fn new(first: String) -> Self {
        Self {
            items: vec![vec![first]],
            compact: true,
        }
    }

    /// Appends to the last item.
    pub fn push_line(&mut self, line: String) {
        match self.items.last_mut() {
            Some(item) => item.push(line),
            None => self.items.push(vec![line]),
        }
    }

    pub fn new_item(&mut self, first: String) {
        self.items.push(vec![first]);
    }

    pub fn mark_loose(&mut self) {
        self.compact = false;
    }

    pub fn into_block(self, style: ListStyle) -> Block {
        match style {
            ListStyle::Bulleted => Block::BulletedList(self),
            ListStyle::Numbered => Block::NumberedList(self),
        }
    }

    fn render_items(&self, refs: &ReferenceTable) -> Vec<String> {
        self.items
            .iter()
            .map(|item| render_item(item, self.compact, refs))
            .collect()
    }
}

impl Block {
    /// Short name used in log output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Separator => "separator",
            Block::Code(_) => "code",
            Block::Paragraph(_) => "paragraph",
            Block::Quote(_) => "quote",
            Block::BulletedList(_) => "bulleted list",
            Block::NumberedList(_) => "numbered list",
        }
    }

    /// Runs inline processing over the collected lines.
    ///
    /// Called once the whole document has been assembled, so every
    /// reference definition is already in `refs`.
    pub fn finish(self, refs: &ReferenceTable) -> RenderedBlock {
        match self {
            Block::Separator => RenderedBlock::Separator,
            Block::Code(code) => {
                RenderedBlock::Code(html::text(&code.lines.join("\n")).into_owned())
            }
            Block::Paragraph(paragraph) => {
                let mut text = paragraph
                    .reply
                    .as_ref()
                    .map(reply_prefix)
                    .unwrap_or_default();
                text.push_str(&join_lines(&paragraph.lines, refs));
                RenderedBlock::Paragraph(text)
            }
            Block::Quote(quote) => RenderedBlock::Quote(join_lines(&quote.lines, refs)),
            Block::BulletedList(list) => RenderedBlock::BulletedList(list.render_items(refs)),
            Block::NumberedList(list) => RenderedBlock::NumberedList(list.render_items(refs)),
        }
    }
}

fn reply_prefix(reply: &ReplyTarget) -> String {
    format!(
        "Re <a href='#{}'>#{}</a>: ",
        html::single_quoted_attr(&reply.anchor),
        reply.target
    )
}

/// Space-joins rendered lines; a line ending in two whitespace characters
/// is followed by a hard break.
fn join_lines(lines: &[String], refs: &ReferenceTable) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        out.push_str(&render_inline(line, refs));
        if i + 1 < lines.len() {
            out.push(' ');
        }
        if Paragraph::ends_with_hard_break(line) {
            out.push_str(Paragraph::HARD_BREAK);
        }
    }
    out
}

fn render_item(lines: &[String], compact: bool, refs: &ReferenceTable) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i == 0 && !compact {
            out.push_str(Paragraph::OPEN);
        }
        if line.is_empty() {
            out.push_str(Paragraph::OPEN);
            continue;
        }
        out.push_str(&render_inline(line, refs));
        if lines.get(i + 1).is_some_and(|next| !next.is_empty()) {
            out.push(' ');
        }
        if Paragraph::ends_with_hard_break(line) {
            out.push_str(Paragraph::HARD_BREAK);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn paragraph_lines_are_space_joined() {
        let block = Block::Paragraph(ParagraphBlock {
            reply: None,
            lines: lines(&["one", "two"]),
        });
        assert_eq!(
            block.finish(&ReferenceTable::new()),
            RenderedBlock::Paragraph("one two".to_string())
        );
    }

    #[test]
    fn hard_break_follows_the_separator() {
        let text = join_lines(&lines(&["one  ", "two"]), &ReferenceTable::new());
        assert_eq!(text, "one   <br>two");
    }

    #[test]
    fn reply_prefix_uses_anchor() {
        let block = Block::Paragraph(ParagraphBlock::reply(
            ReplyTarget::new("42", "5"),
            "thanks".to_string(),
        ));
        assert_eq!(
            block.finish(&ReferenceTable::new()),
            RenderedBlock::Paragraph("Re <a href='#42-5'>#5</a>: thanks".to_string())
        );
    }

    #[test]
    fn empty_reply_seeds_no_line() {
        let paragraph = ParagraphBlock::reply(ReplyTarget::new("c", "1"), String::new());
        assert!(paragraph.lines.is_empty());
    }

    #[test]
    fn code_is_escaped_and_newline_joined() {
        let block = Block::Code(CodeBlock {
            lines: lines(&["if a < b {", "  *x"]),
        });
        assert_eq!(
            block.finish(&ReferenceTable::new()),
            RenderedBlock::Code("if a &lt; b {\n  *x".to_string())
        );
    }

    #[test]
    fn tight_item_is_inline() {
        assert_eq!(
            render_item(&lines(&["a", "b"]), true, &ReferenceTable::new()),
            "a b"
        );
    }

    #[test]
    fn loose_item_paragraphs() {
        assert_eq!(
            render_item(&lines(&["a", "", "b"]), false, &ReferenceTable::new()),
            "<p>a<p>b"
        );
    }

    #[test]
    fn list_push_line_goes_to_last_item() {
        let mut list = ListBlock::new("a".into());
        list.new_item("b".into());
        list.push_line("c".into());
        assert_eq!(list.items, vec![lines(&["a"]), lines(&["b", "c"])]);
        assert!(list.compact);
        list.mark_loose();
        assert!(!list.compact);
    }
}
