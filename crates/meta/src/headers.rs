//! Multi-valued, case-insensitive header container.
//!
//! The extractor's input is a plain owned multimap rather than any HTTP
//! client's header type, so the normalization contract stays independent of
//! whichever transport stack feeds it. The one operation that matters is
//! [`get_all`](Headers::get_all): checksum headers legitimately repeat.

/// Case-insensitive multimap of header names to values.
///
/// Names are folded to lowercase on insertion; values are kept verbatim in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value; existing values under the same name are kept.
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.entries.push((name.as_ref().to_ascii_lowercase(), value.into()));
    }

    /// The first value recorded under `name`, if any.
    #[must_use]
    pub fn get(&self, name: impl AsRef<str>) -> Option<&str> {
        let name = name.as_ref().to_ascii_lowercase();
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }

    /// Every value recorded under `name`, in insertion order.
    #[must_use]
    pub fn get_all(&self, name: impl AsRef<str>) -> Vec<&str> {
        let name = name.as_ref().to_ascii_lowercase();
        self.entries.iter().filter(|(n, _)| *n == name).map(|(_, v)| v.as_str()).collect()
    }

    #[must_use]
    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.get(name).is_some()
    }

    /// Total number of recorded values (not distinct names).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        headers.extend(iter);
        headers
    }
}

impl<K: AsRef<str>, V: Into<String>> Extend<(K, V)> for Headers {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_lookup() {
        let mut headers = Headers::new();
        headers.insert("X-Goog-Generation", "1516846088066588");
        assert_eq!(headers.get("x-goog-generation"), Some("1516846088066588"));
        assert!(headers.contains("X-GOOG-GENERATION"));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_get_all_preserves_insertion_order() {
        let headers: Headers = [
            ("x-goog-hash", "crc32c=Tf8tmw=="),
            ("X-Goog-Hash", "md5=mkaUfJxiLXeSEl2OpExGOA=="),
            ("content-type", "image/jpeg"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            headers.get_all("x-goog-hash"),
            vec!["crc32c=Tf8tmw==", "md5=mkaUfJxiLXeSEl2OpExGOA=="]
        );
        // `get` is the first occurrence, not the last.
        assert_eq!(headers.get("x-goog-hash"), Some("crc32c=Tf8tmw=="));
    }

    #[test]
    fn test_missing_name() {
        let headers = Headers::new();
        assert!(headers.get("etag").is_none());
        assert!(headers.get_all("x-goog-hash").is_empty());
        assert!(headers.is_empty());
    }
}
