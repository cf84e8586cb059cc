/// `<scheme:anything>` and `<user@host>` autolinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Autolink<'a> {
    /// Text between the angle brackets.
    pub address: &'a str,
    /// Whether this is an email address rather than a URI.
    pub email: bool,
    /// Bytes consumed, angle brackets included.
    pub len: usize,
}

impl Autolink<'_> {
    pub const OPEN: u8 = b'<';
    pub const CLOSE: u8 = b'>';
    pub const MAILTO: &'static str = "mailto:";

    /// Tries a URI autolink first, then an email autolink.
    pub fn parse(s: &str) -> Option<Autolink<'_>> {
        Self::uri(s).or_else(|| Self::email(s))
    }

    /// `<` word characters, `:`, at least one character other than `>`,
    /// then `>`.
    fn uri(s: &str) -> Option<Autolink<'_>> {
        let rest = s.strip_prefix(char::from(Self::OPEN))?;
        let scheme = rest
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();
        if scheme == 0 || rest.as_bytes().get(scheme) != Some(&b':') {
            return None;
        }
        let close = rest.find(char::from(Self::CLOSE))?;
        if close <= scheme + 1 {
            return None;
        }
        Some(Autolink {
            address: &rest[..close],
            email: false,
            len: close + 2,
        })
    }

    /// `<` a run of non-whitespace containing an `@` with something on both
    /// sides, then `>`. The longest such run wins.
    fn email(s: &str) -> Option<Autolink<'_>> {
        let rest = s.strip_prefix(char::from(Self::OPEN))?;
        let run = rest.find(|c: char| c.is_ascii_whitespace()).unwrap_or(rest.len());
        let candidates = rest[..run]
            .match_indices(char::from(Self::CLOSE))
            .map(|(at, _)| at)
            .collect::<Vec<_>>();
        candidates.into_iter().rev().find_map(|close| {
            let address = &rest[..close];
            let has_at = address
                .match_indices('@')
                .any(|(at, _)| at > 0 && at + 1 < address.len());
            has_at.then_some(Autolink {
                address,
                email: true,
                len: close + 2,
            })
        })
    }
}
