use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving the set of instances to scan.
///
/// These are startup errors: they abort the run before any probe is
/// dispatched. Per-probe failures are never represented as errors, they
/// degrade to an unavailable [`crate::status::InstanceStatus`].
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("failed to read instance list '{}': {source}", path.display())]
    InstanceList { path: PathBuf, source: io::Error },
}
