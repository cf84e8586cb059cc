use std::sync::OnceLock;

use regex::Regex;

/// Horizontal rule: three or more of the same `*`, `-` or `_` character,
/// optionally separated by whitespace, and nothing else on the line.
pub struct Separator;

impl Separator {
    pub fn matches(line: &str) -> bool {
        static RULE: OnceLock<Regex> = OnceLock::new();
        let rule = RULE.get_or_init(|| {
            Regex::new(r"^(?:(?:\*[[:space:]]*){3,}|(?:-[[:space:]]*){3,}|(?:_[[:space:]]*){3,})$")
                .expect("Invalid separator regex")
        });
        rule.is_match(line.trim_ascii())
    }
}
