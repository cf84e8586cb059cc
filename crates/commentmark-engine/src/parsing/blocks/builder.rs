use crate::parsing::references::ReferenceTable;

use super::{
    classify::{LineKind, LineRecord},
    cursor::LineCursor,
    kinds::{IndentedCode, ListStyle},
    types::{Block, CodeBlock, ListBlock, ParagraphBlock, QuoteBlock, ReplyTarget},
};

/// Which block is open, carrying the lines collected so far.
#[derive(Debug, Clone, Default)]
enum AssemblerState {
    #[default]
    Start,
    ExplicitCode(CodeBlock),
    IndentedCode(CodeBlock),
    BulletedList(ListBlock),
    NumberedList(ListBlock),
    Quote(QuoteBlock),
    Paragraph(ParagraphBlock),
}

impl AssemblerState {
    fn list(style: ListStyle, list: ListBlock) -> Self {
        match style {
            ListStyle::Bulleted => AssemblerState::BulletedList(list),
            ListStyle::Numbered => AssemblerState::NumberedList(list),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            AssemblerState::Start => "start",
            AssemblerState::ExplicitCode(_) => "explicit code",
            AssemblerState::IndentedCode(_) => "indented code",
            AssemblerState::BulletedList(_) => "bulleted list",
            AssemblerState::NumberedList(_) => "numbered list",
            AssemblerState::Quote(_) => "quote",
            AssemblerState::Paragraph(_) => "paragraph",
        }
    }

    fn into_block(self) -> Option<Block> {
        match self {
            AssemblerState::Start => None,
            AssemblerState::ExplicitCode(code) | AssemblerState::IndentedCode(code) => {
                Some(Block::Code(code))
            }
            AssemblerState::BulletedList(list) => Some(Block::BulletedList(list)),
            AssemblerState::NumberedList(list) => Some(Block::NumberedList(list)),
            AssemblerState::Quote(quote) => Some(Block::Quote(quote)),
            AssemblerState::Paragraph(paragraph) => Some(Block::Paragraph(paragraph)),
        }
    }
}

/// What to do with the line just handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Consumed,
    /// The open block was closed; offer the same line again from `Start`.
    Reprocess,
}

/// Groups classified lines into [`Block`]s.
///
/// Reference definitions are recorded into the table as they are met and
/// produce no block.
pub struct BlockBuilder<'r> {
    references: &'r mut ReferenceTable,
    context_id: &'r str,
    state: AssemblerState,
    out: Vec<Block>,
}

impl<'r> BlockBuilder<'r> {
    pub fn new(references: &'r mut ReferenceTable, context_id: &'r str) -> Self {
        Self {
            references,
            context_id,
            state: AssemblerState::Start,
            out: vec![],
        }
    }

    pub fn run(mut self, mut lines: LineCursor<'_>) -> Vec<Block> {
        while let Some(line) = lines.next() {
            if self.push(line, lines.peek()) == Step::Reprocess {
                lines.push_back();
            }
        }
        // Input without an end-of-input record still closes its last block.
        if let Some(block) = std::mem::take(&mut self.state).into_block() {
            self.emit(block);
        }
        self.out
    }

    fn push(&mut self, line: &LineRecord, next: Option<&LineRecord>) -> Step {
        match std::mem::take(&mut self.state) {
            AssemblerState::Start => {
                self.start(line);
                Step::Consumed
            }
            AssemblerState::ExplicitCode(mut code) => match line.kind {
                LineKind::CodeFence { .. } => {
                    self.emit(Block::Code(code));
                    Step::Consumed
                }
                LineKind::EndOfInput => {
                    self.emit(Block::Code(code));
                    Step::Reprocess
                }
                _ => {
                    code.push_line(line.raw.clone());
                    self.state = AssemblerState::ExplicitCode(code);
                    Step::Consumed
                }
            },
            AssemblerState::IndentedCode(mut code) => {
                if line.is_indented_code() {
                    code.push_line(IndentedCode::dedent(&line.raw).to_string());
                    self.state = AssemblerState::IndentedCode(code);
                    Step::Consumed
                } else {
                    self.emit(Block::Code(code));
                    Step::Reprocess
                }
            }
            AssemblerState::BulletedList(list) => {
                self.push_list(ListStyle::Bulleted, list, line, next)
            }
            AssemblerState::NumberedList(list) => {
                self.push_list(ListStyle::Numbered, list, line, next)
            }
            AssemblerState::Quote(mut quote) => match &line.kind {
                LineKind::Quote { text } => {
                    quote.push_line(text.clone());
                    self.state = AssemblerState::Quote(quote);
                    Step::Consumed
                }
                _ => {
                    self.emit(Block::Quote(quote));
                    Step::Reprocess
                }
            },
            AssemblerState::Paragraph(mut paragraph) => match &line.kind {
                LineKind::Text { text, .. } => {
                    paragraph.push_line(text.clone());
                    self.state = AssemblerState::Paragraph(paragraph);
                    Step::Consumed
                }
                _ => {
                    self.emit(Block::Paragraph(paragraph));
                    Step::Reprocess
                }
            },
        }
    }

    fn start(&mut self, line: &LineRecord) {
        let state = match &line.kind {
            LineKind::Blank | LineKind::EndOfInput => return,
            LineKind::Separator => {
                self.emit(Block::Separator);
                return;
            }
            LineKind::ReferenceDefinition(def) => {
                self.references
                    .define(&def.label, &def.destination, def.title.as_deref());
                return;
            }
            LineKind::CodeFence { .. } => AssemblerState::ExplicitCode(CodeBlock::default()),
            LineKind::Text { .. } if line.is_indented_code() => AssemblerState::IndentedCode(
                CodeBlock::seeded(IndentedCode::dedent(&line.raw).to_string()),
            ),
            LineKind::BulletedItem { text } => {
                AssemblerState::BulletedList(ListBlock::new(text.clone()))
            }
            LineKind::NumberedItem { text } => {
                AssemblerState::NumberedList(ListBlock::new(text.clone()))
            }
            LineKind::Quote { text } => AssemblerState::Quote(QuoteBlock::new(text.clone())),
            LineKind::ReplyHeader { target, text } => AssemblerState::Paragraph(
                ParagraphBlock::reply(ReplyTarget::new(self.context_id, target), text.clone()),
            ),
            LineKind::Text { text, .. } => {
                AssemblerState::Paragraph(ParagraphBlock::new(text.clone()))
            }
        };
        log::trace!(
            "open {} at {}..{}",
            state.name(),
            line.span.start,
            line.span.end
        );
        self.state = state;
    }

    fn push_list(
        &mut self,
        style: ListStyle,
        mut list: ListBlock,
        line: &LineRecord,
        next: Option<&LineRecord>,
    ) -> Step {
        let blank = matches!(line.kind, LineKind::Blank);
        if let LineKind::Text { text, .. } = &line.kind {
            list.push_line(text.clone());
        } else if let Some(text) = item_text(&line.kind, style) {
            list.new_item(text.to_string());
        } else if blank && next.is_some_and(|n| item_text(&n.kind, style).is_some()) {
            list.mark_loose();
        } else if blank && next.is_some_and(LineRecord::is_indented_code) {
            list.mark_loose();
            list.push_line(String::new());
        } else {
            self.emit(list.into_block(style));
            return Step::Reprocess;
        }
        self.state = AssemblerState::list(style, list);
        Step::Consumed
    }

    fn emit(&mut self, block: Block) {
        log::trace!("close {}", block.kind_name());
        self.out.push(block);
    }
}

/// The item text of `kind` if it is a marker of the given list style.
fn item_text(kind: &LineKind, style: ListStyle) -> Option<&str> {
    match (kind, style) {
        (LineKind::BulletedItem { text }, ListStyle::Bulleted)
        | (LineKind::NumberedItem { text }, ListStyle::Numbered) => Some(text.as_str()),
        _ => None,
    }
}
