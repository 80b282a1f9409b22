//! CLI for phishfeat.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use phishfeat_core::config::{self, PhishfeatConfig};
use std::path::PathBuf;

use commands::{run_extract, run_features, run_inspect};

/// Top-level CLI for phishfeat.
#[derive(Debug, Parser)]
#[command(name = "phishfeat")]
#[command(about = "phishfeat: phishing-detection feature extraction from URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Extract features for every URL in a CSV file.
    Extract {
        /// Input CSV with a `URL` column (and optional `Label`). Defaults to config `input_path`.
        input: Option<PathBuf>,
        /// Output CSV. Defaults to config `output_path`.
        output: Option<PathBuf>,
        /// Number of URLs processed concurrently (default from config, 10).
        #[arg(long, value_name = "N")]
        workers: Option<usize>,
        /// Per-call timeout in seconds for WHOIS and HTTP (default from config, 5).
        #[arg(long, value_name = "SECS")]
        timeout_secs: Option<u64>,
    },

    /// Extract and print the features of a single URL.
    Inspect {
        /// URL to inspect.
        url: String,
        /// Per-call timeout in seconds for WHOIS and HTTP.
        #[arg(long, value_name = "SECS")]
        timeout_secs: Option<u64>,
    },

    /// Print the feature column names in output order.
    Features,
}

/// Applies CLI overrides on top of the loaded config.
fn with_overrides(
    cfg: &PhishfeatConfig,
    workers: Option<usize>,
    timeout_secs: Option<u64>,
) -> PhishfeatConfig {
    let mut cfg = cfg.clone();
    if let Some(workers) = workers {
        cfg.workers = workers;
    }
    if let Some(timeout_secs) = timeout_secs {
        cfg.timeout_secs = timeout_secs;
    }
    cfg
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Features => run_features()?,
            CliCommand::Extract {
                input,
                output,
                workers,
                timeout_secs,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let cfg = with_overrides(&cfg, workers, timeout_secs);
                let input = input.unwrap_or_else(|| cfg.input_path.clone());
                let output = output.unwrap_or_else(|| cfg.output_path.clone());
                run_extract(&cfg, &input, &output).await?;
            }
            CliCommand::Inspect { url, timeout_secs } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let cfg = with_overrides(&cfg, None, timeout_secs);
                run_inspect(&cfg, &url).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
