//! CLI command handlers, one per file.

mod extract;
mod features;
mod inspect;

pub use extract::run_extract;
pub use features::run_features;
pub use inspect::run_inspect;

use anyhow::{Context, Result};
use phishfeat_core::config::PhishfeatConfig;
use phishfeat_core::whois::WhoisClient;
use phishfeat_core::{ExtractorSettings, FeatureExtractor};
use std::sync::Arc;

/// Extractor backed by the network WHOIS client.
fn build_extractor(cfg: &PhishfeatConfig) -> Result<FeatureExtractor> {
    let whois = WhoisClient::new(&cfg.whois_or_default(), cfg.timeout())
        .context("initializing whois client")?;
    Ok(FeatureExtractor::new(
        Arc::new(whois),
        ExtractorSettings::from_config(cfg),
    ))
}
