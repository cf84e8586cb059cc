//! Nestable spans: `*`/`_` emphasis, resolved recursively.

use super::{
    cursor::Cursor,
    kinds::{Emphasis, Strength},
};

/// Phase two: wraps matched emphasis runs in `<b>`/`<i>` tags.
///
/// Runs `text` left to right. At each delimiter the longest run is tried
/// first; the matched content is resolved again so emphasis can nest.
/// Delimiters that match nothing are copied through.
pub fn resolve(text: &str) -> String {
    let mut cur = Cursor::new(text);
    let mut out = String::with_capacity(text.len());

    while !cur.eof() {
        if let Some(html) = try_parse_emphasis(&mut cur) {
            out.push_str(&html);
            continue;
        }
        if let Some(ch) = cur.bump_char() {
            out.push(ch);
        }
    }
    out
}

fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<String> {
    let emphasis = Emphasis::from_byte(cur.peek()?)?;
    Strength::ORDER.iter().find_map(|&strength| {
        let m = emphasis.parse(cur.rest(), strength)?;
        let html = format!(
            "{}{}{}",
            strength.open_tag(),
            resolve(m.content),
            strength.close_tag()
        );
        cur.bump_n(m.len);
        Some(html)
    })
}
