use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration for a scan.
///
/// Defaults mirror a stock Tor setup: SOCKS proxy on localhost:9050,
/// metadata served at `/metadata`, known instances in `sdonion.txt`.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Socket address of the local SOCKS5 proxy.
    ///
    /// `None` disables proxying entirely, which lets tests probe a plain
    /// HTTP server on loopback.
    pub proxy_addr: Option<String>,
    /// Path component of the metadata endpoint on each instance.
    pub metadata_path: String,
    /// File holding the known instance list, one address per line.
    pub instance_file: PathBuf,
    /// Per-request timeout. `None` means the client waits indefinitely,
    /// so one stalled instance stalls overall termination.
    pub request_timeout: Option<Duration>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            proxy_addr: Some("127.0.0.1:9050".to_string()),
            metadata_path: "/metadata".to_string(),
            instance_file: PathBuf::from("sdonion.txt"),
            request_timeout: None,
        }
    }
}
