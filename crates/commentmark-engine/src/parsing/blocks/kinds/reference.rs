use std::sync::OnceLock;

use regex::Regex;

/// A parsed `[label]: destination "title"` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDefinition {
    pub label: String,
    pub destination: String,
    pub title: Option<String>,
}

impl ReferenceDefinition {
    /// Parses a reference definition line.
    ///
    /// Up to three leading spaces are allowed. The title is optional and may
    /// be wrapped in double quotes, single quotes or parentheses.
    pub fn parse(line: &str) -> Option<Self> {
        static DEFINITION: OnceLock<Regex> = OnceLock::new();
        let definition = DEFINITION.get_or_init(|| {
            Regex::new(
                r#"^ {0,3}\[([^\]]+)\]:[[:space:]]*([^[:space:]]+)[[:space:]]*(?:"([^"]+)"|'([^']+)'|\(([^)]+)\))?[[:space:]]*$"#,
            )
            .expect("Invalid reference definition regex")
        });

        let caps = definition.captures(line)?;
        let title = caps
            .get(3)
            .or_else(|| caps.get(4))
            .or_else(|| caps.get(5))
            .map(|m| m.as_str().to_string());
        Some(Self {
            label: caps.get(1)?.as_str().to_string(),
            destination: caps.get(2)?.as_str().to_string(),
            title,
        })
    }
}
