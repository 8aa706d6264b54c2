//! Metadata lookup and rendering for the description pane.
//!
//! The dialog never stores descriptive text itself; it pulls
//! [`MetadataRecord`]s from a host-provided [`MetadataStore`] and renders
//! them with [`render_metadata_text`]. A missing record degrades to "field
//! not updated" rather than an error.

use std::collections::HashMap;

use crate::state::{MetadataRecord, ModId};

/// Lookup of descriptive metadata by mod or add-on id.
pub trait MetadataStore {
    /// Record for `id`, or `None` when the store has nothing for it.
    fn lookup(&self, id: ModId) -> Option<MetadataRecord>;
}

/// What: Render a metadata record as the description-pane text.
///
/// Inputs:
/// - `record`: Metadata to format.
///
/// Output:
/// - Multi-line text: title line, then version/author/URL facts for the
///   fields that are present, then the long description after a blank line.
#[must_use]
pub fn render_metadata_text(record: &MetadataRecord) -> String {
    let mut out = String::new();
    out.push_str(&record.title);
    if !record.version.is_empty() {
        out.push('\n');
        out.push_str("Version: ");
        out.push_str(&record.version);
    }
    if !record.authors.is_empty() {
        out.push('\n');
        out.push_str("Author: ");
        out.push_str(&record.authors.join(", "));
    }
    if !record.url.is_empty() {
        out.push('\n');
        out.push_str("URL: ");
        out.push_str(&record.url);
    }
    if !record.description.is_empty() {
        out.push_str("\n\n");
        out.push_str(&record.description);
    }
    out
}

/// Metadata store backed by a map held in memory.
#[derive(Clone, Debug, Default)]
pub struct StaticMetadata {
    /// Records keyed by id.
    records: HashMap<ModId, MetadataRecord>,
}

impl StaticMetadata {
    /// Build a store from `(id, record)` pairs.
    #[must_use]
    pub fn new(records: impl IntoIterator<Item = (ModId, MetadataRecord)>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }
}

impl MetadataStore for StaticMetadata {
    fn lookup(&self, id: ModId) -> Option<MetadataRecord> {
        self.records.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Full record renders every fact line
    ///
    /// - Input: Record with version, authors, URL, and description
    /// - Output: Title first, facts in order, description after a blank line
    fn renders_all_present_fields() {
        let record = MetadataRecord {
            title: "Extra Ships".to_string(),
            version: "1.2".to_string(),
            authors: vec!["ava".to_string(), "kim".to_string()],
            url: "https://example.org/extra-ships".to_string(),
            description: "Adds a dozen player hulls.".to_string(),
        };
        let text = render_metadata_text(&record);
        assert_eq!(
            text,
            "Extra Ships\nVersion: 1.2\nAuthor: ava, kim\nURL: https://example.org/extra-ships\n\nAdds a dozen player hulls."
        );
    }

    #[test]
    /// What: Absent fields leave no empty lines behind
    ///
    /// - Input: Record with only a title
    /// - Output: Just the title
    fn skips_absent_fields() {
        let record = MetadataRecord {
            title: "Bare".to_string(),
            ..MetadataRecord::default()
        };
        assert_eq!(render_metadata_text(&record), "Bare");
    }

    #[test]
    /// What: Static store answers by id and misses cleanly
    ///
    /// - Input: Store with one record
    /// - Output: Hit for the known id, None otherwise
    fn static_store_lookup() {
        let store = StaticMetadata::new([(
            7,
            MetadataRecord {
                title: "Seven".to_string(),
                ..MetadataRecord::default()
            },
        )]);
        assert_eq!(store.lookup(7).map(|r| r.title), Some("Seven".to_string()));
        assert!(store.lookup(8).is_none());
    }
}
