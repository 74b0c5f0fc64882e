pub mod scan;

use clap::Parser;
use sdstatus_common::config::ScanConfig;
use sdstatus_common::target;

#[derive(Parser)]
#[command(name = "sdstatus")]
#[command(version)]
#[command(about = "To scan SecureDrop instances")]
pub struct CommandLine {
    /// Prints output in CSV format
    #[arg(long)]
    pub csv: bool,
    /// Scans all known instances, via the instance list file
    #[arg(long)]
    pub all: bool,
    /// Onion addresses to scan
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolves the target list from the arguments.
    ///
    /// Explicit targets always win; `--all` only kicks in when none were
    /// given, and then the instance list file must be readable. The two
    /// sources are never merged.
    pub fn resolve_targets(&self, cfg: &ScanConfig) -> anyhow::Result<Vec<String>> {
        if !self.targets.is_empty() {
            return Ok(target::normalize(&self.targets));
        }
        if self.all {
            return Ok(target::load_instance_file(&cfg.instance_file)?);
        }
        anyhow::bail!("no targets provided, pass --all to scan the known instance list")
    }
}
