pub mod blocks;
pub mod inline;
pub mod references;
pub mod rope;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use crate::models::Document;
use blocks::{BlockBuilder, CommentLineClassifier, LineCursor};
use references::ReferenceTable;

/// Parses `raw` into a finished [`Document`].
///
/// `context_id` only feeds reply anchors (`<context_id>-<target>`). Each call
/// owns its own reference table; nothing carries over between documents.
pub fn parse_document(raw: &str, context_id: &str) -> Document {
    let rope = Rope::from(raw);
    let lines = CommentLineClassifier.classify_all(&rope);

    let mut references = ReferenceTable::new();
    let blocks = BlockBuilder::new(&mut references, context_id).run(LineCursor::new(&lines));
    log::debug!(
        "{} lines -> {} blocks, {} references",
        lines.len(),
        blocks.len(),
        references.len()
    );

    Document::finish(blocks, &references)
}

/// Converts comment markdown to an HTML fragment. Never fails.
pub fn convert(raw: &str, context_id: &str) -> String {
    parse_document(raw, context_id).to_html()
}
