//! Google Cloud Storage metadata normalization.
//!
//! Google's XML API reports object metadata through the HTTP response
//! headers of a HEAD request, and sees both files and folders as objects.
//! The customized headers carrying what the gateway needs:
//!
//! - `x-goog-hash` — base64-encoded CRC32C and/or MD5 checksums, either as
//!   one occurrence per algorithm or as a single occurrence carrying a
//!   comma-separated `algorithm=digest` list. CRC32C exists for every
//!   object; MD5 only for non-composite ones.
//! - `x-goog-stored-content-length` — the object size as stored. The plain
//!   `Content-Length` header is the response body length after any
//!   server-driven negotiation, not the object size.
//! - `x-goog-generation` — the revision of the object data being accessed.
//!
//! Creation time is absent from these headers and never substituted; the
//! object name is likewise not derivable from headers and comes verbatim
//! from the caller.

use crate::error::{ErrorKind, Result};
use crate::hash::{HashAlgorithm, decode_to_hex};
use crate::headers::Headers;
use crate::model::{FileMetadata, FolderMetadata};
use crate::provider::Provider;
use crate::record::{Extra, NormalizedRecord};
use exn::{OptionExt, ResultExt};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::instrument;

const HEADER_ETAG: &str = "etag";
const HEADER_CONTENT_TYPE: &str = "content-type";
const HEADER_LAST_MODIFIED: &str = "last-modified";
const HEADER_STORED_CONTENT_LENGTH: &str = "x-goog-stored-content-length";
const HEADER_GENERATION: &str = "x-goog-generation";
const HEADER_HASH: &str = "x-goog-hash";

// `algorithm=digest`, the digest running to its base64 padding.
static HASH_PAIR: LazyLock<Regex> =
    // unwrap is safe: the pattern is a literal
    LazyLock::new(|| Regex::new(r"^(crc32c|md5)=(.+==)$").unwrap());

/// Normalizes the headers of a Google Cloud Storage metadata response.
///
/// `object_name` is the provider-native key of the addressed object, taken
/// verbatim from the caller — it seeds the path of whichever metadata
/// variant gets built from the record. Absent singular headers map to
/// `None`; a response with no checksum information at all is not valid
/// metadata and fails instead of producing a partial record.
#[instrument(skip(headers))]
pub fn extract(object_name: &str, headers: &Headers) -> Result<NormalizedRecord> {
    let etag = headers.get(HEADER_ETAG).map(|value| value.trim_matches('"').to_string());
    let content_type = headers.get(HEADER_CONTENT_TYPE).map(str::to_string);
    let last_modified = headers.get(HEADER_LAST_MODIFIED).map(str::to_string);
    let generation = headers.get(HEADER_GENERATION).map(str::to_string);
    let size = headers
        .get(HEADER_STORED_CONTENT_LENGTH)
        .map(|value| {
            value.parse::<u64>().or_raise(|| ErrorKind::MalformedHeader {
                header: HEADER_STORED_CONTENT_LENGTH,
                value: value.to_string(),
            })
        })
        .transpose()?;
    let hashes = parse_hashes(&headers.get_all(HEADER_HASH))?;
    Ok(NormalizedRecord {
        object_name: object_name.to_string(),
        content_type,
        last_modified,
        size,
        etag,
        extra: Extra { generation, hashes },
    })
}

/// Decodes every checksum occurrence into `algorithm -> hex` entries.
///
/// Both header shapes arrive here: repeated occurrences carrying one pair
/// each, and a single occurrence carrying a comma-separated pair list.
fn parse_hashes(occurrences: &[&str]) -> Result<BTreeMap<HashAlgorithm, String>> {
    if occurrences.is_empty() {
        exn::bail!(ErrorKind::MissingHeader(HEADER_HASH));
    }
    let mut hashes = BTreeMap::new();
    for occurrence in occurrences {
        for pair in occurrence.split(',') {
            let captures = HASH_PAIR.captures(pair.trim()).ok_or_raise(|| ErrorKind::MalformedHeader {
                header: HEADER_HASH,
                value: (*occurrence).to_string(),
            })?;
            let algorithm = captures[1].parse::<HashAlgorithm>()?;
            hashes.insert(algorithm, decode_to_hex(&captures[2])?);
        }
    }
    Ok(hashes)
}

/// Canonical file metadata for an object addressed by a file key.
pub fn file_metadata(object_name: &str, headers: &Headers) -> Result<FileMetadata> {
    FileMetadata::from_record(Provider::GoogleCloud, extract(object_name, headers)?)
}

/// Canonical folder metadata for an object addressed by a folder key.
pub fn folder_metadata(object_name: &str, headers: &Headers) -> Result<FolderMetadata> {
    FolderMetadata::from_record(Provider::GoogleCloud, extract(object_name, headers)?)
}
