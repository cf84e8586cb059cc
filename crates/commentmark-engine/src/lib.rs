//! Converts comment-flavoured markdown into embeddable HTML fragments.
//!
//! ```
//! let html = commentmark_engine::convert("Re #5: *agreed*", "42");
//! assert_eq!(html, "<p>Re <a href='#42-5'>#5</a>: <i>agreed</i>");
//! ```

pub mod html;
pub mod io;
pub mod models;
pub mod parsing;

pub use io::*;
pub use models::{Document, RenderedBlock};
pub use parsing::{convert, parse_document};
