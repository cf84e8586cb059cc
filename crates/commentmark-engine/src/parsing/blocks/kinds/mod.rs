//! # Block Kinds
//!
//! Block-specific types that own their line syntax. The classifier asks
//! these types whether a line belongs to them; it never hardcodes a marker.

pub mod block_quote;
pub mod code_fence;
pub mod list_item;
pub mod paragraph;
pub mod reference;
pub mod reply;
pub mod separator;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, IndentedCode};
pub use list_item::{ListMarker, ListStyle};
pub use paragraph::Paragraph;
pub use reference::ReferenceDefinition;
pub use reply::ReplyHeader;
pub use separator::Separator;
