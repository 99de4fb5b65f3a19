//! Transport-encoded checksum handling.
//!
//! Providers transmit binary digest bytes base64-encoded inside text
//! headers; the gateway's canonical representation, used for cross-provider
//! comparison and deduplication, is lowercase hex.

use crate::error::{ErrorKind, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use exn::ResultExt;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Checksum algorithms the gateway tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HashAlgorithm {
    /// CRC32C (Castagnoli), 4-byte digest. Available for every object.
    Crc32c,
    /// MD5, 16-byte digest. Not stored for composite objects.
    Md5,
}

impl HashAlgorithm {
    /// Returns the canonical lowercase name used in provider headers.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Crc32c => "crc32c",
            HashAlgorithm::Md5 => "md5",
        }
    }

    /// Digest length in bytes.
    #[must_use]
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Crc32c => 4,
            HashAlgorithm::Md5 => 16,
        }
    }
}

impl Display for HashAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for HashAlgorithm {
    fn as_ref(&self) -> &'static str {
        self.as_str()
    }
}

impl FromStr for HashAlgorithm {
    type Err = crate::error::Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "crc32c" => Ok(HashAlgorithm::Crc32c),
            "md5" => Ok(HashAlgorithm::Md5),
            other => exn::bail!(ErrorKind::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Decodes a transport-encoded (base64, standard alphabet, padded) digest
/// into its lowercase hex form.
///
/// Pure and deterministic over well-formed input. Malformed padding or
/// alphabet is an [`Encoding`](ErrorKind::Encoding) error — a corrupted
/// checksum must never be reported as valid.
///
/// # Examples
///
/// ```
/// use sluice_meta::decode_to_hex;
/// assert_eq!(decode_to_hex("Tf8tmw==").unwrap(), "4dff2d9b");
/// assert!(decode_to_hex("not base64!").is_err());
/// ```
pub fn decode_to_hex(encoded: &str) -> Result<String> {
    let bytes = STANDARD.decode(encoded).or_raise(|| ErrorKind::Encoding(encoded.to_string()))?;
    Ok(hex::encode(bytes))
}
