/// Backslash escapes.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';
    /// Punctuation that a backslash turns into a literal character.
    pub const ESCAPABLE: &'static [u8] = b"\\`*_{}[]()#+.!-";

    /// Whether `b` may follow a backslash as an escaped literal.
    pub fn is_escapable(b: u8) -> bool {
        Self::ESCAPABLE.contains(&b)
    }
}

/// `&name;`, `&#123;` and `&#x1F;` character references, passed through
/// verbatim instead of having their `&` escaped.
pub struct CharacterReference;

impl CharacterReference {
    pub const AMPERSAND: u8 = b'&';

    /// Length of the character reference at the start of `s`, if any.
    pub fn len(s: &str) -> Option<usize> {
        let body = s.strip_prefix(char::from(Self::AMPERSAND))?.as_bytes();
        let digits = match body {
            [b'#', b'x', rest @ ..] if rest.first().is_some_and(u8::is_ascii_hexdigit) => {
                2 + rest.iter().take_while(|b| b.is_ascii_hexdigit()).count()
            }
            [b'#', rest @ ..] => 1 + count_nonzero(rest.iter().take_while(|b| b.is_ascii_digit()))?,
            _ => count_nonzero(body.iter().take_while(|b| b.is_ascii_alphabetic()))?,
        };
        (body.get(digits) == Some(&b';')).then_some(digits + 2)
    }
}

fn count_nonzero<'a>(run: impl Iterator<Item = &'a u8>) -> Option<usize> {
    let n = run.count();
    (n > 0).then_some(n)
}
