use std::sync::OnceLock;

use regex::Regex;

/// `Re #<digits>:` at the start of a line: a back-reference to another
/// comment in the same thread.
pub struct ReplyHeader;

impl ReplyHeader {
    /// Returns the normalised target id and the remaining text.
    ///
    /// Leading zeros are dropped from the target (`#007` -> `7`).
    pub fn parse(line: &str) -> Option<(String, &str)> {
        static REPLY: OnceLock<Regex> = OnceLock::new();
        let reply = REPLY
            .get_or_init(|| Regex::new(r"^Re #([0-9]+):[[:space:]]*(.*)$").expect("Invalid reply regex"));

        let caps = reply.captures(line)?;
        let digits = caps.get(1)?.as_str();
        let rest = caps.get(2).map_or("", |m| m.as_str());
        Some((normalize_target(digits), rest))
    }
}

fn normalize_target(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
