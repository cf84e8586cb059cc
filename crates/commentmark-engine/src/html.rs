//! HTML escaping used by the renderers.
//!
//! Text content goes through [`text`]; attribute values only ever have `"`
//! replaced, so URLs and titles keep any entities the author wrote.

use std::borrow::Cow;

/// Escapes `&`, `<` and `>` in text content.
pub fn text(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

/// Escapes a double-quoted attribute value.
pub fn attr(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(s.replace('"', "&quot;"))
    } else {
        Cow::Borrowed(s)
    }
}

/// Escapes a single-quoted attribute value.
pub fn single_quoted_attr(s: &str) -> Cow<'_, str> {
    html_escape::encode_single_quoted_attribute(s)
}
