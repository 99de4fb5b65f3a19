//! The virtual path abstraction shared by every storage backend.
//!
//! Object stores expose a flat namespace of keys; hierarchy is a convention
//! layered on top. A [`VirtualPath`] represents one abstract location the
//! gateway can address, parsed either from a canonical string (`/a/b/c`,
//! `/a/b/`) or from a provider-native object key (`a/b/c`, `a/b/`).
//!
//! A trailing separator is the *only* signal distinguishing a file
//! `DSC_0235.JPG` from a folder `DSC_0235.JPG/` — no store is ever probed.

use crate::error::{ErrorKind, Result};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// The hierarchy separator in canonical strings and provider object keys.
pub const SEPARATOR: char = '/';

/// An abstract hierarchical location, independent of any provider.
///
/// Equality and hashing are structural — by segment sequence and folder
/// flag — so paths built from different raw strings but equivalent
/// structure compare equal:
///
/// ```
/// use sluice_path::VirtualPath;
/// let canonical = VirtualPath::parse("/a/b/c")?;
/// let from_key = VirtualPath::from_object_key("a/b/c")?;
/// assert_eq!(canonical, from_key);
/// # Ok::<(), sluice_path::error::Error>(())
/// ```
///
/// Instances are immutable: constructed once at ingress and passed by
/// value or reference through the gateway afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VirtualPath {
    segments: Vec<String>,
    folder: bool,
}

impl VirtualPath {
    /// The root: zero segments, always a folder, rendered as `/`.
    #[must_use]
    pub fn root() -> Self {
        Self { segments: Vec::new(), folder: true }
    }

    /// Parses a raw path string.
    ///
    /// A path is a folder iff the raw string ends with [`SEPARATOR`].
    /// Redundant separators are collapsed, so only already-canonical input
    /// round-trips through [`Display`] unchanged. A leading separator is
    /// optional; provider object keys parse the same as canonical strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use sluice_path::VirtualPath;
    /// assert!(VirtualPath::parse("/test-folder-1/")?.is_folder());
    /// assert!(VirtualPath::parse("/test-folder-1/DSC_0235.JPG")?.is_file());
    /// assert!(VirtualPath::parse("").is_err());
    /// assert!(VirtualPath::parse("a/../b").is_err());
    /// # Ok::<(), sluice_path::error::Error>(())
    /// ```
    pub fn parse(raw: impl AsRef<str>) -> Result<Self> {
        let raw = raw.as_ref();
        if raw.is_empty() {
            exn::bail!(ErrorKind::Empty);
        }
        let mut segments = Vec::new();
        for segment in raw.split(SEPARATOR).filter(|segment| !segment.is_empty()) {
            if segment == "." || segment == ".." {
                exn::bail!(ErrorKind::Traversal(raw.to_string()));
            }
            if segment.contains('\0') {
                exn::bail!(ErrorKind::NulByte(raw.to_string()));
            }
            segments.push(segment.to_string());
        }
        // A run of bare separators normalizes to the root.
        let folder = raw.ends_with(SEPARATOR) || segments.is_empty();
        Ok(Self { segments, folder })
    }

    /// Builds a path from a provider-native flat object key.
    ///
    /// This is the ingress constructor for raw listing entries and metadata
    /// responses: keys carry no leading separator (`a/b/c.jpg`), but the
    /// trailing-separator folder convention is the same.
    pub fn from_object_key(key: impl AsRef<str>) -> Result<Self> {
        Self::parse(key)
    }

    /// `true` iff the original string ended with the separator.
    #[must_use]
    pub fn is_folder(&self) -> bool {
        self.folder
    }

    #[must_use]
    pub fn is_file(&self) -> bool {
        !self.folder
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The last segment, with any trailing separator already accounted for
    /// structurally. The root's name is the empty string.
    #[must_use]
    pub fn name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The enclosing folder, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        match self.segments.split_last() {
            Some((_, rest)) => Some(Self { segments: rest.to_vec(), folder: true }),
            None => None,
        }
    }

    /// Addresses a direct child of this folder.
    ///
    /// A trailing separator on `name` yields a folder child. Fails on file
    /// paths, empty names, traversal segments, and names containing an
    /// interior separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use sluice_path::VirtualPath;
    /// let folder = VirtualPath::parse("/test-folder-1/")?;
    /// assert_eq!(folder.child("DSC_0235.JPG")?.to_string(), "/test-folder-1/DSC_0235.JPG");
    /// assert_eq!(folder.child("test-folder-5/")?.to_string(), "/test-folder-1/test-folder-5/");
    /// # Ok::<(), sluice_path::error::Error>(())
    /// ```
    pub fn child(&self, name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref();
        if !self.folder {
            exn::bail!(ErrorKind::ChildOfFile(self.to_string()));
        }
        let folder = name.ends_with(SEPARATOR);
        let trimmed = name.strip_suffix(SEPARATOR).unwrap_or(name);
        if trimmed.is_empty()
            || trimmed.contains(SEPARATOR)
            || trimmed.contains('\0')
            || trimmed == "."
            || trimmed == ".."
        {
            exn::bail!(ErrorKind::InvalidChild(name.to_string()));
        }
        let mut segments = self.segments.clone();
        segments.push(trimmed.to_string());
        Ok(Self { segments, folder })
    }
}

impl Display for VirtualPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.segments.is_empty() {
            return write!(f, "{SEPARATOR}");
        }
        for segment in &self.segments {
            write!(f, "{SEPARATOR}{segment}")?;
        }
        if self.folder {
            write!(f, "{SEPARATOR}")?;
        }
        Ok(())
    }
}

impl FromStr for VirtualPath {
    type Err = crate::error::Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for VirtualPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for VirtualPath {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(|err| serde::de::Error::custom(&*err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/test-folder-1/", true)]
    #[case("test-folder-1/", true)]
    #[case("/test-folder-1/DSC_0235.JPG", false)]
    #[case("test-folder-1/DSC_0235.JPG", false)]
    #[case("DSC_0235.JPG/", true)]
    #[case("DSC_0235.JPG", false)]
    fn test_trailing_separator_is_the_only_folder_signal(#[case] raw: &str, #[case] folder: bool) {
        let path = VirtualPath::parse(raw).unwrap();
        assert_eq!(path.is_folder(), folder);
        assert_eq!(path.is_file(), !folder);
    }

    #[rstest]
    #[case("/")]
    #[case("/a/b/c")]
    #[case("/a/b/")]
    #[case("/DSC_0235.JPG")]
    fn test_canonical_round_trip(#[case] raw: &str) {
        assert_eq!(VirtualPath::parse(raw).unwrap().to_string(), raw);
    }

    #[test]
    fn test_structural_equality() {
        let canonical = VirtualPath::parse("/a/b/c").unwrap();
        assert_eq!(canonical, VirtualPath::from_object_key("a/b/c").unwrap());
        assert_eq!(canonical, VirtualPath::parse("//a//b//c").unwrap());
        // Same segments, different flag: a file is never its same-named folder.
        assert_ne!(canonical, VirtualPath::parse("/a/b/c/").unwrap());
    }

    #[test]
    fn test_hashing_is_structural() {
        use std::collections::HashSet;
        let mut seen = HashSet::new();
        seen.insert(VirtualPath::parse("/a/b/").unwrap());
        assert!(seen.contains(&VirtualPath::from_object_key("a/b/").unwrap()));
        assert!(!seen.contains(&VirtualPath::from_object_key("a/b").unwrap()));
    }

    #[test]
    fn test_root() {
        let root = VirtualPath::root();
        assert!(root.is_root());
        assert!(root.is_folder());
        assert_eq!(root.to_string(), "/");
        assert_eq!(root.name(), "");
        assert!(root.parent().is_none());
        assert_eq!(VirtualPath::parse("/").unwrap(), root);
        assert_eq!(VirtualPath::parse("///").unwrap(), root);
    }

    #[rstest]
    #[case("/a/b/c", "c")]
    #[case("/a/b/", "b")]
    #[case("test-folder-1/", "test-folder-1")]
    #[case("DSC_0235.JPG", "DSC_0235.JPG")]
    fn test_name_is_the_last_segment(#[case] raw: &str, #[case] name: &str) {
        assert_eq!(VirtualPath::parse(raw).unwrap().name(), name);
    }

    #[test]
    fn test_parent() {
        let path = VirtualPath::parse("/a/b/c").unwrap();
        let parent = path.parent().unwrap();
        assert_eq!(parent, VirtualPath::parse("/a/b/").unwrap());
        assert!(parent.is_folder());
        assert_eq!(parent.parent().unwrap().parent().unwrap(), VirtualPath::root());
    }

    #[test]
    fn test_child() {
        let folder = VirtualPath::parse("/a/").unwrap();
        assert_eq!(folder.child("b").unwrap().to_string(), "/a/b");
        assert_eq!(folder.child("b/").unwrap().to_string(), "/a/b/");
        assert!(folder.child("").is_err());
        assert!(folder.child("b/c").is_err());
        assert!(folder.child("..").is_err());
        assert!(VirtualPath::parse("/a/file").unwrap().child("b").is_err());
    }

    #[test]
    fn test_parent_child_round_trip() {
        let path = VirtualPath::parse("/a/b/c.txt").unwrap();
        assert_eq!(path.parent().unwrap().child(path.name()).unwrap(), path);
    }

    #[rstest]
    #[case("")]
    #[case("../escape")]
    #[case("a/../b")]
    #[case("a/./b")]
    #[case(".")]
    #[case("a\0b")]
    fn test_invalid_input(#[case] raw: &str) {
        assert!(VirtualPath::parse(raw).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_as_canonical_string() {
        let path = VirtualPath::parse("/a/b/").unwrap();
        assert_eq!(serde_json::to_string(&path).unwrap(), "\"/a/b/\"");
        let back: VirtualPath = serde_json::from_str("\"/a/b/\"").unwrap();
        assert_eq!(back, path);
    }
}
