use sdstatus_common::config::ScanConfig;
use sdstatus_common::status::InstanceStatus;
use sdstatus_core::scanner::{self, OnResult};

use crate::terminal::format;

/// Runs the scan and prints the results.
///
/// In CSV mode each line is printed as its result arrives; in JSON mode the
/// full set is rendered once at the end, in arrival order.
pub async fn scan(targets: &[String], csv: bool, cfg: &ScanConfig) -> anyhow::Result<()> {
    let on_result: Option<OnResult> = if csv {
        Some(Box::new(|status: &InstanceStatus| {
            println!("{}", status.csv_line());
        }))
    } else {
        None
    };

    let results = scanner::perform_scan(targets, cfg, on_result).await?;

    if !csv {
        println!("{}", format::to_json_pretty(&results)?);
    }
    Ok(())
}
