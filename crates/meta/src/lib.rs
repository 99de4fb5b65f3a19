//! Canonical metadata for the sluice storage gateway.
//!
//! Every backend encodes size, checksums, modification time, and hierarchy
//! differently. This crate turns raw provider responses (header sets,
//! listing fields) into one canonical model the rest of the gateway can
//! rely on: provider responses go through a per-provider extractor into a
//! [`NormalizedRecord`], and from there into a [`Metadata`] value.
//!
//! The contract is all-or-nothing: a fully valid canonical object, or a
//! loud error. Partial metadata is worse than an explicit failure, because
//! downstream consumers cannot distinguish "unknown" from "zero".

pub mod error;
mod hash;
mod headers;
mod model;
pub mod provider;
mod record;

pub use crate::hash::{HashAlgorithm, decode_to_hex};
pub use crate::headers::Headers;
pub use crate::model::{FileMetadata, FolderMetadata, Metadata};
pub use crate::provider::Provider;
pub use crate::record::{Extra, NormalizedRecord};
