//! The canonical metadata model.
//!
//! One object, one [`Metadata`] value — a tagged union over the file and
//! folder variants, regardless of which provider the raw response came
//! from. Construction is pure: no I/O, no caching beyond the parsed path,
//! no logging of business data.

use crate::error::{ErrorKind, Result};
use crate::provider::Provider;
use crate::record::{Extra, NormalizedRecord};
use exn::ResultExt;
use sluice_path::VirtualPath;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

// IMF-fixdate, the shape of every `Last-Modified` value this layer sees.
const HTTP_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT");

/// Canonical metadata for one object, independent of origin provider.
///
/// The two variants share the addressing surface ([`provider`](Self::provider),
/// [`path`](Self::path), [`name`](Self::name)); everything content-related
/// lives on the file variant only. Values are immutable and hold no
/// reference back to any provider connection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Metadata {
    File(FileMetadata),
    Folder(FolderMetadata),
}

impl Metadata {
    /// Builds the variant matching the record's object name: a trailing
    /// separator addresses a folder, anything else a file.
    pub fn from_record(provider: Provider, record: NormalizedRecord) -> Result<Self> {
        let path = VirtualPath::from_object_key(&record.object_name).map_err(ErrorKind::path)?;
        Ok(match path.is_folder() {
            true => Metadata::Folder(FolderMetadata { provider, path }),
            false => Metadata::File(FileMetadata::with_path(provider, path, record)),
        })
    }

    pub fn provider(&self) -> Provider {
        match self {
            Metadata::File(file) => file.provider(),
            Metadata::Folder(folder) => folder.provider(),
        }
    }

    pub fn path(&self) -> &VirtualPath {
        match self {
            Metadata::File(file) => file.path(),
            Metadata::Folder(folder) => folder.path(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Metadata::File(file) => file.name(),
            Metadata::Folder(folder) => folder.name(),
        }
    }

    #[must_use]
    pub fn is_folder(&self) -> bool {
        matches!(self, Metadata::Folder(_))
    }
}

/// Canonical metadata for a file object.
///
/// The `path` is derived from the raw object name exactly once, at
/// construction — there is no second source of truth for location.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FileMetadata {
    provider: Provider,
    path: VirtualPath,
    content_type: Option<String>,
    modified: Option<String>,
    size: Option<u64>,
    etag: Option<String>,
    extra: Extra,
}

impl FileMetadata {
    /// Builds file metadata from a normalized record.
    ///
    /// Variant selection belongs to the caller: fails with
    /// [`NotAFile`](ErrorKind::NotAFile) when the record's object name
    /// addresses a folder.
    pub fn from_record(provider: Provider, record: NormalizedRecord) -> Result<Self> {
        let path = VirtualPath::from_object_key(&record.object_name).map_err(ErrorKind::path)?;
        if path.is_folder() {
            exn::bail!(ErrorKind::NotAFile(record.object_name));
        }
        Ok(Self::with_path(provider, path, record))
    }

    fn with_path(provider: Provider, path: VirtualPath, record: NormalizedRecord) -> Self {
        Self {
            provider,
            path,
            content_type: record.content_type,
            modified: record.last_modified,
            size: record.size,
            etag: record.etag,
            extra: record.extra,
        }
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Location of the file, derived from the provider object name.
    pub fn path(&self) -> &VirtualPath {
        &self.path
    }

    /// Final path segment.
    pub fn name(&self) -> &str {
        self.path.name()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Verbatim `Last-Modified` value as supplied by the provider.
    pub fn modified(&self) -> Option<&str> {
        self.modified.as_deref()
    }

    /// Typed UTC view of [`modified`](Self::modified).
    ///
    /// Fails loudly on a malformed date instead of degrading to `None`,
    /// which would be indistinguishable from "not supplied".
    pub fn modified_utc(&self) -> Result<Option<OffsetDateTime>> {
        self.modified
            .as_deref()
            .map(|raw| {
                PrimitiveDateTime::parse(raw, HTTP_DATE)
                    .map(PrimitiveDateTime::assume_utc)
                    .or_raise(|| ErrorKind::MalformedHeader {
                        header: "last-modified",
                        value: raw.to_string(),
                    })
            })
            .transpose()
    }

    /// Object creation time.
    ///
    /// No supported provider exposes creation time through metadata
    /// headers, and it is never substituted with another timestamp — that
    /// would fabricate data the provider never supplied.
    pub fn created_utc(&self) -> Option<OffsetDateTime> {
        None
    }

    /// Size in bytes as stored, when the provider reported one. `None`
    /// means unknown, never zero.
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// Entity tag with any surrounding quotes stripped.
    pub fn etag(&self) -> Option<&str> {
        self.etag.as_deref()
    }

    /// Provider-specific fields: revision token and checksum map.
    pub fn extra(&self) -> &Extra {
        &self.extra
    }
}

/// Canonical metadata for a folder object: addressing surface only.
///
/// Size, checksums, and timestamps are not applicable to folders in this
/// model and are deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FolderMetadata {
    provider: Provider,
    path: VirtualPath,
}

impl FolderMetadata {
    /// Builds folder metadata from a normalized record.
    ///
    /// Fails with [`NotAFolder`](ErrorKind::NotAFolder) when the record's
    /// object name addresses a file.
    pub fn from_record(provider: Provider, record: NormalizedRecord) -> Result<Self> {
        let path = VirtualPath::from_object_key(&record.object_name).map_err(ErrorKind::path)?;
        if !path.is_folder() {
            exn::bail!(ErrorKind::NotAFolder(record.object_name));
        }
        Ok(Self { provider, path })
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn path(&self) -> &VirtualPath {
        &self.path
    }

    /// Final path segment, trailing separator handled structurally.
    pub fn name(&self) -> &str {
        self.path.name()
    }
}
