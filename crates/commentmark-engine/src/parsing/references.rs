//! # Reference Table
//!
//! Link reference definitions (`[label]: destination "title"`) collected while
//! the block builder walks a document, consumed by the inline processor once
//! every block is finished. One table per conversion; nothing is shared
//! between documents.

use std::collections::HashMap;

/// The destination and optional title a reference label points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReference {
    pub destination: String,
    pub title: Option<String>,
}

/// Case-insensitive mapping from reference label to [`LinkReference`].
///
/// Redefining a label replaces the earlier entry (last definition in document
/// order wins).
#[derive(Debug, Default, Clone)]
pub struct ReferenceTable {
    entries: HashMap<String, LinkReference>,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the definition for `label`.
    pub fn define(&mut self, label: &str, destination: &str, title: Option<&str>) {
        let key = fold_label(label);
        let reference = LinkReference {
            destination: destination.to_string(),
            title: title.map(str::to_string),
        };
        if let Some(previous) = self.entries.insert(key, reference) {
            log::debug!(
                "reference [{label}] redefined, replacing {}",
                previous.destination
            );
        } else {
            log::debug!("reference [{label}] defined -> {destination}");
        }
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(&fold_label(label))
    }

    /// Looks up `label`; an unknown label is `None`, never a panic.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&LinkReference> {
        self.entries.get(&fold_label(label))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn fold_label(label: &str) -> String {
    label.to_lowercase()
}
