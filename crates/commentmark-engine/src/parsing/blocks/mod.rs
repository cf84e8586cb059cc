//! # Block Parsing
//!
//! Two-phase block parsing: lines are classified on their own, then a state
//! machine groups them into blocks.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineRecord`
//!    whose `LineKind` is decided without looking at other lines
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` walks the records
//!    through a `LineCursor`, opening and closing blocks and recording link
//!    reference definitions as it goes
//!
//! ## Modules
//!
//! - **`types`**: `Block` and the per-variant line collections
//! - **`kinds`**: block types owning their markers and patterns
//! - **`classify`**: `CommentLineClassifier` produces a `LineRecord` per line
//! - **`cursor`**: `LineCursor` with one line of lookahead and push-back
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Blocks never nest: a list cannot hold a quote, a quote cannot hold code
//! - Code blocks are raw zones: their lines are never inline-processed
//! - The only context the builder looks at beyond the current line is the
//!   next one, to tell a loose list from the end of a tight one

pub mod builder;
pub mod classify;
pub mod cursor;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{CommentLineClassifier, LineKind, LineRecord};
pub use cursor::LineCursor;
pub use types::{Block, CodeBlock, ListBlock, ParagraphBlock, QuoteBlock, ReplyTarget};
