//! # Concurrent Scan Loop
//!
//! Fan-out/fan-in: one tokio task per non-empty target, all launched
//! immediately, each sending exactly one status into a shared channel. The
//! collector receives exactly as many results as were dispatched, in arrival
//! order, then returns.
//!
//! There is no concurrency limit, no retry and no cancellation: a probe that
//! hangs stalls overall termination without affecting the other probes.

use sdstatus_common::config::ScanConfig;
use sdstatus_common::status::InstanceStatus;
use tokio::sync::mpsc;
use tracing::debug;

use crate::probe;

/// Called with each status as it is collected, before the scan finishes.
/// Lets the caller stream output (e.g. CSV lines) in arrival order.
pub type OnResult = Box<dyn Fn(&InstanceStatus) + Send + Sync>;

/// Probes every non-empty target concurrently and collects all results.
///
/// Targets are trimmed; empty entries are skipped without dispatching a
/// probe, so the returned vector's length equals the number of non-empty
/// targets. Probe failures surface as `available == false` records; the only
/// error this function returns is client/proxy construction failure.
pub async fn perform_scan(
    targets: &[String],
    cfg: &ScanConfig,
    on_result: Option<OnResult>,
) -> anyhow::Result<Vec<InstanceStatus>> {
    let client = probe::build_client(cfg)?;
    let (tx, mut rx) = mpsc::unbounded_channel::<InstanceStatus>();

    let mut dispatched: usize = 0;
    for raw in targets {
        let url = raw.trim().to_string();
        if url.is_empty() {
            continue;
        }

        let client = client.clone();
        let cfg = cfg.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let status = probe::probe_instance(&client, &cfg, &url).await;
            // The collector counts on exactly one send per dispatched probe.
            let _ = tx.send(status);
        });
        dispatched += 1;
    }
    drop(tx);
    debug!("dispatched {dispatched} probes");

    let mut results: Vec<InstanceStatus> = Vec::with_capacity(dispatched);
    while results.len() < dispatched {
        match rx.recv().await {
            Some(status) => {
                if let Some(callback) = &on_result {
                    callback(&status);
                }
                results.push(status);
            }
            None => break,
        }
    }

    Ok(results)
}
