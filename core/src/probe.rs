//! # Instance Probe
//!
//! One probe is one `GET http://<target><metadata_path>` routed through the
//! configured SOCKS5 proxy. Any failure along the way (request construction,
//! proxy dial, connect, body read, body not a metadata object) degrades the
//! probe to an unavailable status; nothing propagates past the probe
//! boundary.

use reqwest::{Client, Proxy};
use sdstatus_common::config::ScanConfig;
use sdstatus_common::status::{InstanceMetadata, InstanceStatus};
use tracing::debug;

use crate::error::ScanError;

/// Builds the HTTP client shared by all probe tasks.
///
/// Uses the `socks5h` scheme so hostname resolution happens on the proxy
/// side; resolving .onion addresses locally cannot work.
pub fn build_client(cfg: &ScanConfig) -> Result<Client, ScanError> {
    let mut builder = Client::builder();

    if let Some(proxy_addr) = &cfg.proxy_addr {
        let proxy = Proxy::all(format!("socks5h://{proxy_addr}")).map_err(ScanError::Proxy)?;
        builder = builder.proxy(proxy);
    }
    if let Some(timeout) = cfg.request_timeout {
        builder = builder.timeout(timeout);
    }

    builder.build().map_err(ScanError::Proxy)
}

/// Probes a single instance and always produces exactly one status record.
pub async fn probe_instance(client: &Client, cfg: &ScanConfig, url: &str) -> InstanceStatus {
    let metadata_url = format!("http://{url}{}", cfg.metadata_path);

    let response = match client.get(&metadata_url).send().await {
        Ok(response) => response,
        Err(e) => {
            debug!("request to {metadata_url} failed: {e}");
            return InstanceStatus::unavailable(url);
        }
    };

    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => {
            debug!("reading body from {metadata_url} failed: {e}");
            return InstanceStatus::unavailable(url);
        }
    };

    match serde_json::from_slice::<InstanceMetadata>(&body) {
        Ok(info) => InstanceStatus::available(url, info),
        Err(e) => {
            debug!("{metadata_url} served malformed metadata: {e}");
            InstanceStatus::unavailable(url)
        }
    }
}
