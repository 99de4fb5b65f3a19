//! Provider-specific normalization front-ends.
//!
//! Each backend gets a sibling module translating its raw response shape
//! into a [`NormalizedRecord`](crate::NormalizedRecord); everything after
//! that point is provider-independent.

pub mod googlecloud;

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Identifies the storage backend a metadata value originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Provider {
    /// Google Cloud Storage, addressed through its XML API.
    GoogleCloud,
    /// Google Drive.
    GoogleDrive,
}

impl Provider {
    /// Returns the canonical lowercase tag used across the gateway.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::GoogleCloud => "googlecloud",
            Provider::GoogleDrive => "googledrive",
        }
    }
}

impl Display for Provider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for Provider {
    fn as_ref(&self) -> &'static str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_tags() {
        assert_eq!(Provider::GoogleCloud.as_str(), "googlecloud");
        assert_eq!(Provider::GoogleDrive.to_string(), "googledrive");
    }
}
