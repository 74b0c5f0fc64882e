//! # Scan Target Resolution
//!
//! A target is a plain hidden-service address, supplied on the command line
//! or loaded from the instance list file (one address per line, blank lines
//! ignored). Entries are trimmed; whitespace-only entries never reach the
//! scanner.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::TargetError;

/// Trims every entry and drops the empty ones.
pub fn normalize(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads the known instance list from `path`.
///
/// The file must exist and be readable; a missing list is a fatal startup
/// error, not an empty scan.
pub fn load_instance_file(path: &Path) -> Result<Vec<String>, TargetError> {
    let data = fs::read_to_string(path).map_err(|source| TargetError::InstanceList {
        path: path.to_path_buf(),
        source,
    })?;

    let targets = normalize(&data.lines().map(str::to_string).collect::<Vec<_>>());
    debug!("loaded {} instances from {}", targets.len(), path.display());
    Ok(targets)
}
