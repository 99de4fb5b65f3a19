//! Provider settings for the sluice storage gateway.
//!
//! Settings merge three layers, later layers winning: built-in defaults,
//! an optional TOML file (the platform config directory by default, or an
//! explicit path), and `SLUICE_`-prefixed environment variables with `__`
//! as the section separator — `SLUICE_GOOGLEDRIVE__BASE_URL` overrides
//! `base_url` in the `[googledrive]` table.
//!
//! Only the settings the metadata core's providers need live here; transport
//! concerns (credentials, endpoints for upload sessions, retry tuning) are
//! configured by the layers that own them.

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::{OptionExt, ResultExt};
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::Deserialize;
use std::path::Path;
use tracing::instrument;

/// Gateway-wide provider settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Google Cloud Storage. There are no sensible defaults for a bucket,
    /// so this stays absent until configured explicitly.
    pub googlecloud: Option<GoogleCloudSettings>,
    pub googledrive: GoogleDriveSettings,
}

/// Settings for the Google Cloud Storage provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GoogleCloudSettings {
    /// Bucket holding the addressed objects.
    pub bucket: String,
    /// Bucket region, e.g. `US-EAST1`.
    pub region: String,
}

/// Settings for the Google Drive provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GoogleDriveSettings {
    pub base_url: String,
    pub base_upload_url: String,
    /// Sentinel revision ID Drive reports for documents that keep no
    /// usable version history; revisions carrying it must not be pinned.
    pub drive_ignore_version: String,
}

impl Default for GoogleDriveSettings {
    fn default() -> Self {
        Self {
            base_url: "https://www.googleapis.com/drive/v2".to_string(),
            base_upload_url: "https://www.googleapis.com/upload/drive/v2".to_string(),
            drive_ignore_version: "11f5441f214fc1f1e4de45d21565257b".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from `<platform config dir>/sluice/config.toml`
    /// (missing file means defaults), then the environment.
    #[instrument]
    pub fn load() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "sluice").ok_or_raise(|| ErrorKind::NoConfigDir)?;
        Self::from_figment(Figment::new().merge(Toml::file(dirs.config_dir().join("config.toml"))))
    }

    /// Loads settings from an explicit TOML file, then the environment.
    #[instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_figment(Figment::new().merge(Toml::file(path.as_ref())))
    }

    fn from_figment(figment: Figment) -> Result<Self> {
        figment.merge(Env::prefixed("SLUICE_").split("__")).extract().or_raise(|| ErrorKind::Load)
    }
}
