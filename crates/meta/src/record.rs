//! The intermediate record between raw provider responses and the
//! canonical metadata model.

use crate::hash::HashAlgorithm;
use std::collections::BTreeMap;

/// Canonical field names extracted from one provider response.
///
/// Every field the metadata model depends on is present or explicitly
/// `None` — "not supplied by the provider" is distinguishable at the type
/// level from "zero" or "empty string", and an extractor never leaves a
/// required field absent; it fails instead.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NormalizedRecord {
    /// Provider-native flat key of the object, verbatim from the caller.
    pub object_name: String,
    pub content_type: Option<String>,
    /// Verbatim `Last-Modified` header value.
    pub last_modified: Option<String>,
    /// Stored size in bytes, when the provider reported one.
    pub size: Option<u64>,
    /// Entity tag with any surrounding quotes stripped.
    pub etag: Option<String>,
    pub extra: Extra,
}

/// Provider-specific fields preserved for callers that need them, e.g.
/// deduplication and version pinning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Extra {
    /// Opaque revision token of the object data being accessed.
    pub generation: Option<String>,
    /// Per-algorithm digests in canonical lowercase hex.
    pub hashes: BTreeMap<HashAlgorithm, String>,
}
