//! Normalized original path → local file lookup table.

use serde::Serialize;
use std::collections::BTreeMap;

/// Case-insensitive lookup from original site path to the mirrored file.
///
/// Keys are normalized with [`super::normalize_key`] before insertion (once:
/// collecting from pairs normalizes, [`PathMapping::insert`] does not); values are paths relative
/// to the mirror root in forward-slash form. Built once per run, then only
/// read. On key collision the last insert wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathMapping {
    entries: BTreeMap<String, String>,
}

impl PathMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts under `key` as given, returning the value it replaced. The key
    /// must already be normalized (see [`super::normalize_key`]).
    pub fn insert(&mut self, key: impl Into<String>, local_path: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), local_path.into())
    }

    /// Looks up an already-normalized key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for PathMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = PathMapping::new();
        for (k, v) in iter {
            mapping.insert(super::normalize_key(k.as_ref()), v);
        }
        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_stores_key_as_given() {
        let mut m = PathMapping::new();
        m.insert("/docs/guide/", "docs/guide.html");
        assert_eq!(m.get("/docs/guide/"), Some("docs/guide.html"));
        assert_eq!(m.get("/docs/guide"), None);
    }

    #[test]
    fn collect_normalizes_once() {
        let m: PathMapping = [("/Docs/Guide//", "docs/guide.html"), ("/FAQ/", "faq.html")]
            .into_iter()
            .collect();
        assert_eq!(m.get("/docs/guide/"), Some("docs/guide.html"));
        assert_eq!(m.get("/faq"), Some("faq.html"));
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn last_write_wins() {
        let mut m = PathMapping::new();
        assert!(m.insert("/faq", "faq.html").is_none());
        assert_eq!(m.insert("/faq", "faq/index.html").as_deref(), Some("faq.html"));
        assert_eq!(m.len(), 1);
        assert_eq!(m.get("/faq"), Some("faq/index.html"));
    }

    #[test]
    fn serializes_as_plain_object() {
        let m: PathMapping = [("/", "index.html"), ("/faq", "faq.html")].into_iter().collect();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"/":"index.html","/faq":"faq.html"}"#);
    }
}
