//! # Inline Processing
//!
//! Turns the text of one block line into HTML in three phases.
//!
//! ## Architecture
//!
//! Inline processing runs after block assembly, once the reference table is
//! complete, so a reference may be used before the line that defines it.
//!
//! 1. **`atomics::extract`** renders code spans, links, images, autolinks and
//!    escapes, leaving a [`PLACEHOLDER`] where each one was.
//! 2. **`nestables::resolve`** wraps `*`/`_` emphasis in `<b>`/`<i>`,
//!    recursing into the emphasised content.
//! 3. **`atomics::restore`** puts the rendered atomic spans back, in order.
//!
//! ## Modules
//!
//! - **`kinds`**: inline types owning their delimiters and matching rules
//! - **`cursor`**: `Cursor` for left-to-right scanning
//! - **`atomics`**: phases one and three
//! - **`nestables`**: phase two
//!
//! ## Raw Zone Precedence
//!
//! Atomic spans are raw zones: `` `*not emphasis*` `` renders as a code span
//! with literal asterisks, and `[a_b](x_y)` never produces `<i>`.

pub mod atomics;
pub mod cursor;
pub mod kinds;
pub mod nestables;

use crate::parsing::references::ReferenceTable;

/// Stands in for an extracted atomic span between phases.
pub const PLACEHOLDER: char = '\0';

/// Renders one line of block text to HTML.
pub fn render_inline(raw: &str, refs: &ReferenceTable) -> String {
    let extracted = atomics::extract(raw, refs);
    let resolved = nestables::resolve(&extracted.text);
    atomics::restore(&resolved, extracted.substitutions)
}
