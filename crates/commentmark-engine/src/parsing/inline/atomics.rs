//! Atomic spans: extracted before emphasis is resolved, restored after.
//!
//! Each matched span is rendered to HTML immediately and replaced in the
//! working text by a single [`PLACEHOLDER`]. Emphasis resolution only ever
//! sees the placeholder, so delimiters inside code spans, link labels or
//! URLs can never be read as markup.

use std::borrow::Cow;

use crate::html;
use crate::parsing::references::ReferenceTable;

use super::{
    PLACEHOLDER,
    cursor::Cursor,
    kinds::{Autolink, Bracketed, CharacterReference, CodeSpan, Escape, InlineTarget},
};

/// Working text with placeholders, plus the HTML each one stands for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    pub text: String,
    /// Rendered spans in the order their placeholders appear in `text`.
    pub substitutions: Vec<String>,
}

/// Phase one: pulls every atomic span out of `raw`.
///
/// At each position the matchers are tried in a fixed priority order and
/// the first one that matches consumes its span. Unmatched `<` and `&` are
/// entity-escaped, and any placeholder character already present in `raw`
/// is dropped.
pub fn extract(raw: &str, refs: &ReferenceTable) -> Extracted {
    let raw = strip_placeholders(raw);
    let mut cur = Cursor::new(&raw);
    let mut out = Extracted::default();

    while !cur.eof() {
        let at_line_start = cur.pos() == 0;
        let span = try_parse_code_span(&mut cur, 2)
            .or_else(|| try_parse_code_span(&mut cur, 1))
            .or_else(|| try_parse_reference_image(&mut cur, refs))
            .or_else(|| try_parse_inline_image(&mut cur))
            .or_else(|| try_parse_inline_link(&mut cur))
            .or_else(|| try_parse_reference_link(&mut cur, refs))
            .or_else(|| try_parse_implicit_reference_link(&mut cur, refs))
            .or_else(|| try_parse_autolink(&mut cur))
            .or_else(|| try_parse_escape(&mut cur));
        if let Some(html) = span {
            out.text.push(PLACEHOLDER);
            out.substitutions.push(html);
            continue;
        }

        if let Some(len) = CharacterReference::len(cur.rest()) {
            out.text.push_str(&cur.rest()[..len]);
            cur.bump_n(len);
            continue;
        }
        if at_line_start
            && cur.peek() == Some(Escape::BACKSLASH)
            && cur.peek_at(1).is_some_and(|b| b.is_ascii_digit())
        {
            // `\1. not a list`: the digit is kept, only the backslash goes.
            cur.bump_n(1);
            continue;
        }

        match cur.bump_char() {
            Some('<') => out.text.push_str("&lt;"),
            Some('&') => out.text.push_str("&amp;"),
            Some(ch) => out.text.push(ch),
            None => {}
        }
    }
    out
}

/// Phase three: swaps each placeholder for the next unused substitution.
///
/// Substitutions are consumed strictly in order; emphasis resolution never
/// reorders, drops or duplicates placeholders, so the counts always agree.
pub fn restore(text: &str, substitutions: Vec<String>) -> String {
    let mut subs = substitutions.into_iter();
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == PLACEHOLDER {
            if let Some(html) = subs.next() {
                out.push_str(&html);
            } else {
                log::debug!("placeholder without a substitution in {text:?}");
            }
        } else {
            out.push(ch);
        }
    }
    out
}

fn strip_placeholders(raw: &str) -> Cow<'_, str> {
    if raw.contains(PLACEHOLDER) {
        Cow::Owned(raw.replace(PLACEHOLDER, ""))
    } else {
        Cow::Borrowed(raw)
    }
}

fn try_parse_code_span(cur: &mut Cursor<'_>, ticks: usize) -> Option<String> {
    let m = CodeSpan::parse(cur.rest(), ticks)?;
    cur.bump_n(m.len);
    Some(format!("<code>{}</code>", html::text(m.content)))
}

/// `![alt][label]`, only when `label` is defined.
fn try_parse_reference_image(cur: &mut Cursor<'_>, refs: &ReferenceTable) -> Option<String> {
    let rest = cur.rest().strip_prefix(char::from(Bracketed::IMAGE))?;
    let alt = Bracketed::parse(rest)?;
    let label = Bracketed::parse(&rest[alt.len..])?;
    let reference = refs.get(label.inner)?;
    cur.bump_n(1 + alt.len + label.len);
    Some(image(
        &reference.destination,
        alt.inner,
        reference.title.as_deref(),
    ))
}

/// `![alt](destination "title")`
fn try_parse_inline_image(cur: &mut Cursor<'_>) -> Option<String> {
    let rest = cur.rest().strip_prefix(char::from(Bracketed::IMAGE))?;
    let alt = Bracketed::parse(rest)?;
    let target = InlineTarget::parse(&rest[alt.len..])?;
    cur.bump_n(1 + alt.len + target.len);
    Some(image(target.destination, alt.inner, target.title))
}

/// `[text](destination "title")`
fn try_parse_inline_link(cur: &mut Cursor<'_>) -> Option<String> {
    let text = Bracketed::parse(cur.rest())?;
    let target = InlineTarget::parse(&cur.rest()[text.len..])?;
    cur.bump_n(text.len + target.len);
    Some(link(target.destination, target.title, text.inner))
}

/// `[text][label]`. An unknown label leaves the brackets as literal text.
fn try_parse_reference_link(cur: &mut Cursor<'_>, refs: &ReferenceTable) -> Option<String> {
    let text = Bracketed::parse(cur.rest())?;
    let label = Bracketed::parse(&cur.rest()[text.len..])?;
    let Some(reference) = refs.get(label.inner) else {
        log::debug!("unknown reference [{}], leaving as text", label.inner);
        return None;
    };
    cur.bump_n(text.len + label.len);
    Some(link(
        &reference.destination,
        reference.title.as_deref(),
        text.inner,
    ))
}

/// `[label][]`, only when `label` is defined.
fn try_parse_implicit_reference_link(
    cur: &mut Cursor<'_>,
    refs: &ReferenceTable,
) -> Option<String> {
    let label = Bracketed::parse(cur.rest())?;
    if !cur.rest()[label.len..].starts_with(Bracketed::EMPTY) {
        return None;
    }
    let reference = refs.get(label.inner)?;
    cur.bump_n(label.len + Bracketed::EMPTY.len());
    Some(link(
        &reference.destination,
        reference.title.as_deref(),
        label.inner,
    ))
}

fn try_parse_autolink(cur: &mut Cursor<'_>) -> Option<String> {
    let auto = Autolink::parse(cur.rest())?;
    cur.bump_n(auto.len);
    let scheme = if auto.email { Autolink::MAILTO } else { "" };
    Some(format!(
        r#"<a href="{scheme}{}">{}</a>"#,
        html::attr(auto.address),
        html::text(auto.address)
    ))
}

/// `\*` and friends become the literal character.
fn try_parse_escape(cur: &mut Cursor<'_>) -> Option<String> {
    if cur.peek() != Some(Escape::BACKSLASH) {
        return None;
    }
    let escaped = cur.peek_at(1).filter(|b| Escape::is_escapable(*b))?;
    cur.bump_n(2);
    Some(char::from(escaped).to_string())
}

fn link(destination: &str, title: Option<&str>, text: &str) -> String {
    format!(
        r#"<a href="{}" title="{}">{}</a>"#,
        html::attr(destination),
        html::attr(title.unwrap_or_default()),
        html::text(text)
    )
}

fn image(destination: &str, alt: &str, title: Option<&str>) -> String {
    format!(
        r#"<img src="{}" alt="{}" title="{}">"#,
        html::attr(destination),
        html::attr(alt),
        html::attr(title.unwrap_or_default())
    )
}
