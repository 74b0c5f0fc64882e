mod commands;
mod terminal;

use commands::CommandLine;
use sdstatus_common::config::ScanConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    terminal::logging::init();

    let cfg = ScanConfig::default();
    let targets = commands.resolve_targets(&cfg)?;

    commands::scan::scan(&targets, commands.csv, &cfg).await
}
