//! Command-line configuration.

use crate::commands::Command;
use crate::response::to_json;
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Split collections into chunk or round-robin partitions.
#[derive(Debug, Parser)]
#[command(name = "partition", version)]
pub struct CliConfig {
    /// Log filter in `tracing` directive syntax, e.g. `debug` or `support=debug,info`
    #[arg(long, env = "PARTITION_LOG", default_value = "info", global = true)]
    pub log_level: String,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Installs the global `tracing` subscriber. Logs go to stderr.
    pub fn init_tracing(&self) -> anyhow::Result<()> {
        let filter = EnvFilter::try_new(&self.log_level)
            .with_context(|| format!("invalid log filter '{}'", self.log_level))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))
    }

    /// Runs the selected command against the process stdin and prints the
    /// result as JSON.
    pub fn run(&self) -> anyhow::Result<()> {
        let stdin = std::io::stdin();
        let result = self.command.execute(stdin.lock())?;
        println!("{}", to_json(&result, self.pretty)?);
        Ok(())
    }
}
