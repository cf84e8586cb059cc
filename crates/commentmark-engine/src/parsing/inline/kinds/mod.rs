//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and matching
//! rules. Matchers here are pure: they look at the remaining input and
//! report how many bytes a match covers. The scanners in `atomics` and
//! `nestables` decide when to call them and what to emit.

pub mod autolink;
pub mod code_span;
pub mod emphasis;
pub mod escape;
pub mod link;

pub use autolink::Autolink;
pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strength};
pub use escape::{CharacterReference, Escape};
pub use link::{Bracketed, InlineTarget};
