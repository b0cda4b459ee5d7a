//! Stale to current route mapping table.
//!
//! The built-in table carries both templated patterns (`{type}`, `{id}`) and
//! concrete instances (`123`, `doc`, `post`) so literal examples in the docs are
//! rewritten too. Consumption order is by descending length of the stale
//! pattern (see [`MappingTable::by_length_desc`]), not insertion order.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::io;

/// One stale route pattern and its replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub old: String,
    pub new: String,
}

impl MappingEntry {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }
}

const BUILTIN_MAPPINGS: &[(&str, &str)] = &[
    // Incorrect entries paths in hierarchy
    ("/entries/{type}/entries/", "/entries/{type}/hierarchy/"),
    ("/entries/doc/entries/", "/entries/doc/hierarchy/"),
    ("/entries/post/entries/", "/entries/post/hierarchy/"),
    ("/entries/{type}/entries/{path}", "/entries/{type}/hierarchy/{path}"),
    (
        "/entries/doc/entries/getting-started",
        "/entries/doc/hierarchy/getting-started",
    ),
    (
        "/entries/doc/entries/doc/getting-started",
        "/entries/doc/hierarchy/getting-started",
    ),
    // Remaining image URLs
    ("GET /image/123.webp", "GET /images/123.webp"),
    ("GET /image/123", "GET /images/123"),
    // Base entry endpoints
    ("/entry/post", "/entries/post/list"),
    ("/entry/doc", "/entries/doc/list"),
    ("/entry/{type}", "/entries/{type}/list"),
    ("/entry/batch/post", "/entries/post/batch"),
    ("/entry/batch/doc", "/entries/doc/batch"),
    ("/entry/batch/{type}", "/entries/{type}/batch"),
    ("/entry/{type}/{path}", "/entries/{type}/show/{path}"),
    // Duplicate 'entries' segments
    ("/entries/doc/entries/doc/hierarchy/", "/entries/doc/hierarchy/"),
    ("/entries/doc/entries/docs/hierarchy/", "/entries/doc/hierarchy/"),
    ("/entries/doc/entries/doc/hierarchys/", "/entries/doc/hierarchy/"),
    (
        "/entries/{type}/entries/{type}/hierarchy/",
        "/entries/{type}/hierarchy/",
    ),
    ("/entries/post/entries/post/hierarchy/", "/entries/post/hierarchy/"),
    // Hierarchy pluralization
    ("/entries/doc/hierarchys/", "/entries/doc/hierarchy/"),
    ("/entries/{type}/hierarchys/", "/entries/{type}/hierarchy/"),
    // Old hierarchy endpoints
    ("/hierarchy/doc", "/entries/doc/hierarchy"),
    ("/hierarchy/post", "/entries/post/hierarchy"),
    ("/hierarchy/{type}", "/entries/{type}/hierarchy"),
    ("/hierarchy/doc/", "/entries/doc/hierarchy/"),
    ("/hierarchy/post/", "/entries/post/hierarchy/"),
    ("/hierarchy/{type}/", "/entries/{type}/hierarchy/"),
    (
        "/hierarchy/doc/docs/getting-started",
        "/entries/doc/hierarchy/docs/getting-started",
    ),
    ("/hierarchy/{type}/{path}", "/entries/{type}/hierarchy/{path}"),
    // Image endpoints
    ("/image/123.jpg", "/images/123.jpg"),
    ("/image/123.jpeg", "/images/123.jpeg"),
    ("/image/123.png", "/images/123.png"),
    ("/image/123.webp", "/images/123.webp"),
    ("/image/123.gif", "/images/123.gif"),
    ("/image/{id}.jpg", "/images/{id}.jpg"),
    ("/image/{id}.jpeg", "/images/{id}.jpeg"),
    ("/image/{id}.png", "/images/{id}.png"),
    ("/image/{id}.webp", "/images/{id}.webp"),
    ("/image/{id}.gif", "/images/{id}.gif"),
    ("/image/123/", "/images/123/"),
    ("/image/{id}/", "/images/{id}/"),
    ("/image/123/metadata", "/images/123/metadata"),
    ("/image/{id}/metadata", "/images/{id}/metadata"),
    // Webhook endpoints
    ("/webhook/doc", "/webhooks/doc"),
    ("/webhook/post", "/webhooks/post"),
    ("/webhook/{type}", "/webhooks/{type}"),
    ("/webhook/doc/", "/webhooks/doc/"),
    ("/webhook/post/", "/webhooks/post/"),
    ("/webhook/{type}/", "/webhooks/{type}/"),
    // HTTP method prefixed endpoints
    ("GET /entry/", "GET /entries/"),
    ("POST /entry/", "POST /entries/"),
    ("PUT /entry/", "PUT /entries/"),
    ("DELETE /entry/", "DELETE /entries/"),
    ("GET /image/", "GET /images/"),
    ("POST /image/", "POST /images/"),
    ("PUT /image/", "PUT /images/"),
    ("DELETE /image/", "DELETE /images/"),
    ("GET /webhook/", "GET /webhooks/"),
    ("POST /webhook/", "POST /webhooks/"),
    ("PUT /webhook/", "PUT /webhooks/"),
    ("DELETE /webhook/", "DELETE /webhooks/"),
    ("GET /hierarchy/", "GET /entries/"),
    ("POST /hierarchy/", "POST /entries/"),
    // Remaining base endpoints
    ("/entry/", "/entries/"),
    ("/image/", "/images/"),
    ("/webhook/", "/webhooks/"),
    ("/hierarchy/", "/entries/"),
    // OpenAPI path references
    ("\"path\": \"/entry/", "\"path\": \"/entries/"),
    ("\"path\": \"/image/", "\"path\": \"/images/"),
    ("\"path\": \"/webhook/", "\"path\": \"/webhooks/"),
    ("\"path\": \"/hierarchy/", "\"path\": \"/entries/"),
];

/// Validated, immutable set of mappings. Built once per run and passed
/// explicitly to the engine and the file processor.
#[derive(Debug, Clone)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
}

impl MappingTable {
    /// Build a table, rejecting empty or duplicated `old` keys.
    pub fn new(entries: Vec<MappingEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.old.is_empty() {
                return Err(Error::config_invalid_value(
                    "old",
                    None,
                    format!("Mapping to '{}' has an empty pattern", entry.new),
                ));
            }
            if !seen.insert(entry.old.as_str()) {
                return Err(Error::config_invalid_value(
                    "old",
                    Some(entry.old.clone()),
                    format!("Pattern '{}' is mapped more than once", entry.old),
                )
                .with_hint("Each stale pattern may appear only once in the table"));
            }
        }
        Ok(Self { entries })
    }

    /// The route rename table shipped with the tool.
    pub fn builtin() -> Self {
        let entries = BUILTIN_MAPPINGS
            .iter()
            .map(|(old, new)| MappingEntry::new(*old, *new))
            .collect();
        Self { entries }
    }

    /// Load a replacement table from a JSON array of `{"old", "new"}` objects.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::validation_invalid_argument(
                "mappings",
                format!("Mapping file not found: {}", path.display()),
                Some(path.display().to_string()),
            ));
        }
        let raw = io::read_file(path, &format!("read mapping file {}", path.display()))?;
        let entries: Vec<MappingEntry> = serde_json::from_str(&raw)
            .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))?;
        Self::new(entries)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries sorted by descending character length of `old`. The sort is
    /// stable, so equal-length patterns keep their insertion order.
    pub fn by_length_desc(&self) -> Vec<&MappingEntry> {
        let mut sorted: Vec<&MappingEntry> = self.entries.iter().collect();
        sorted.sort_by_key(|entry| std::cmp::Reverse(entry.old.chars().count()));
        sorted
    }

    /// Entries whose `old` key occurs anywhere in `content`, in insertion order.
    ///
    /// Best-effort diagnostic only: a key found here may not have produced an
    /// actual textual change.
    pub fn present_in<'a>(&'a self, content: &str) -> Vec<&'a MappingEntry> {
        self.entries
            .iter()
            .filter(|entry| content.contains(entry.old.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_valid() {
        let builtin = MappingTable::builtin();
        assert_eq!(builtin.len(), 72);
        let rebuilt = MappingTable::new(builtin.entries().to_vec());
        assert!(rebuilt.is_ok(), "builtin table has empty or duplicate keys");
    }

    #[test]
    fn rejects_duplicate_keys() {
        let result = MappingTable::new(vec![
            MappingEntry::new("/entry/", "/entries/"),
            MappingEntry::new("/entry/", "/other/"),
        ]);
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_value");
        assert_eq!(err.details["value"], "/entry/");
    }

    #[test]
    fn rejects_empty_key() {
        let result = MappingTable::new(vec![MappingEntry::new("", "/entries/")]);
        assert!(result.is_err());
    }

    #[test]
    fn sorts_longest_first_and_keeps_ties_stable() {
        let table = MappingTable::new(vec![
            MappingEntry::new("/a/", "1"),
            MappingEntry::new("/b/", "2"),
            MappingEntry::new("/long/", "3"),
            MappingEntry::new("/c/", "4"),
        ])
        .unwrap();

        let order: Vec<&str> = table.by_length_desc().iter().map(|e| e.old.as_str()).collect();
        assert_eq!(order, vec!["/long/", "/a/", "/b/", "/c/"]);
    }

    #[test]
    fn builtin_sort_puts_verb_image_before_bare_image() {
        let table = MappingTable::builtin();
        let sorted = table.by_length_desc();
        let pos = |key: &str| sorted.iter().position(|e| e.old == key).unwrap();
        assert!(pos("GET /image/123.webp") < pos("/image/123.webp"));
        assert!(pos("/entry/{type}/{path}") < pos("/entry/{type}"));
        assert!(pos("/hierarchy/doc/") < pos("/hierarchy/"));
    }

    #[test]
    fn present_in_reports_substring_hits_in_insertion_order() {
        let table = MappingTable::builtin();
        let hits: Vec<&str> = table
            .present_in("See /webhook/post and /entry/doc")
            .iter()
            .map(|e| e.old.as_str())
            .collect();
        assert_eq!(hits, vec!["/entry/doc", "/webhook/post", "/entry/", "/webhook/"]);
    }

    #[test]
    fn from_json_file_loads_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mappings.json");
        std::fs::write(
            &path,
            r#"[{"old": "/v1/user", "new": "/v2/users"}, {"old": "/v1/", "new": "/v2/"}]"#,
        )
        .unwrap();

        let table = MappingTable::from_json_file(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0], MappingEntry::new("/v1/user", "/v2/users"));
    }

    #[test]
    fn from_json_file_reports_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mappings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = MappingTable::from_json_file(&path).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_json");
    }

    #[test]
    fn from_json_file_reports_missing_file() {
        let err = MappingTable::from_json_file(Path::new("/nonexistent/mappings.json")).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
    }
}
