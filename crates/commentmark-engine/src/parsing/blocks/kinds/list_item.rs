use std::sync::OnceLock;

use regex::Regex;

/// Which list a marker belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    /// `-`, `*` or `+` followed by whitespace.
    Bulleted,
    /// Digits, a period, then whitespace.
    Numbered,
}

/// List item markers at the very start of a line.
pub struct ListMarker;

impl ListMarker {
    /// Returns the list style and the item text if `line` starts an item.
    ///
    /// Numbered markers are tried first; both require non-empty item text.
    pub fn parse(line: &str) -> Option<(ListStyle, &str)> {
        static NUMBERED: OnceLock<Regex> = OnceLock::new();
        static BULLETED: OnceLock<Regex> = OnceLock::new();
        let numbered = NUMBERED
            .get_or_init(|| Regex::new(r"^[0-9]+\.[[:space:]]+(.+)").expect("Invalid numbered item regex"));
        let bulleted = BULLETED
            .get_or_init(|| Regex::new(r"^[-*+][[:space:]]+(.+)").expect("Invalid bulleted item regex"));

        if let Some(caps) = numbered.captures(line) {
            return caps.get(1).map(|m| (ListStyle::Numbered, m.as_str()));
        }
        if let Some(caps) = bulleted.captures(line) {
            return caps.get(1).map(|m| (ListStyle::Bulleted, m.as_str()));
        }
        None
    }
}
