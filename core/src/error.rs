use thiserror::Error;

/// Fatal scan setup errors.
///
/// Only whole-scan setup can fail; an individual probe degrades to an
/// unavailable status instead of raising.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("can't connect to the proxy: {0}")]
    Proxy(#[source] reqwest::Error),
}
