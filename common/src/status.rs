//! # Instance Status Model
//!
//! Defines the result record produced for every probed instance and the
//! metadata document a reachable instance serves.
//!
//! Serialized field names are part of the output contract: JSON output
//! elements look like `{"Info":{"sd_version":...,"gpg_fpr":...},"Url":...,
//! "Available":...}`.

use serde::{Deserialize, Serialize};

/// Metadata document served by a SecureDrop instance at its metadata
/// endpoint.
///
/// Fields missing from the body silently default to empty strings; no
/// schema validation is performed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceMetadata {
    #[serde(rename = "sd_version", default)]
    pub version: String,
    #[serde(rename = "gpg_fpr", default)]
    pub fingerprint: String,
}

/// Outcome of probing a single instance.
///
/// Created exactly once per dispatched probe, immutable after creation.
/// When `available` is false the metadata is zero-valued, never a partial
/// fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceStatus {
    #[serde(rename = "Info")]
    pub info: InstanceMetadata,
    #[serde(rename = "Url")]
    pub url: String,
    #[serde(rename = "Available")]
    pub available: bool,
}

impl InstanceStatus {
    /// Result record for a probe that failed for any reason.
    pub fn unavailable(url: &str) -> Self {
        Self {
            info: InstanceMetadata::default(),
            url: url.to_string(),
            available: false,
        }
    }

    /// Result record for a successful probe.
    pub fn available(url: &str, info: InstanceMetadata) -> Self {
        Self {
            info,
            url: url.to_string(),
            available: true,
        }
    }

    /// One CSV output line: `<target>,<version>,<fingerprint>`.
    pub fn csv_line(&self) -> String {
        format!("{},{},{}", self.url, self.info.version, self.info.fingerprint)
    }
}
