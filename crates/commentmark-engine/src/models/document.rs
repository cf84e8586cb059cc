use std::fmt;

use crate::parsing::blocks::Block;
use crate::parsing::references::ReferenceTable;

/// A block after inline processing, ready to be written out as HTML.
///
/// Paragraph and list item tags are never closed; the fragment is meant to
/// be embedded as-is and browsers close them implicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedBlock {
    Separator,
    /// Escaped code text.
    Code(String),
    /// Inline HTML, reply prefix included.
    Paragraph(String),
    Quote(String),
    /// One inline HTML string per item.
    BulletedList(Vec<String>),
    NumberedList(Vec<String>),
}

impl fmt::Display for RenderedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderedBlock::Separator => f.write_str("<hr>"),
            RenderedBlock::Code(text) => write!(f, "<pre class='code'>{text}</pre>"),
            RenderedBlock::Paragraph(text) => write!(f, "<p>{text}"),
            RenderedBlock::Quote(text) => write!(f, "<blockquote>{text}</blockquote>"),
            RenderedBlock::BulletedList(items) => write_list(f, "ul", items),
            RenderedBlock::NumberedList(items) => write_list(f, "ol", items),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, tag: &str, items: &[String]) -> fmt::Result {
    write!(f, "<{tag}>")?;
    for item in items {
        write!(f, "<li>{item}")?;
    }
    write!(f, "</{tag}>")
}

/// A finished document: rendered blocks in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<RenderedBlock>,
}

impl Document {
    /// Finalizes every block against the completed reference table.
    pub fn finish(blocks: Vec<Block>, refs: &ReferenceTable) -> Self {
        Self {
            blocks: blocks.into_iter().map(|b| b.finish(refs)).collect(),
        }
    }

    pub fn blocks(&self) -> &[RenderedBlock] {
        &self.blocks
    }

    /// Concatenated HTML of every block, with no separators between them.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.blocks.iter().try_for_each(|block| write!(f, "{block}"))
    }
}
