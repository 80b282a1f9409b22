//! `phishfeat inspect <url>` – features of one URL.

use anyhow::{Context, Result};
use phishfeat_core::config::PhishfeatConfig;
use phishfeat_core::Extraction;

use super::build_extractor;

fn print_extraction(url: &str, extraction: &Extraction) {
    println!("{}", url);
    for (name, value) in extraction.features.named() {
        println!("  {:<14} {}", name, value);
    }
    if extraction.whois_failed {
        println!("  (whois lookup failed: domain features defaulted)");
    }
    if extraction.fetch_failed {
        println!("  (page fetch failed: content features defaulted)");
    }
}

pub async fn run_inspect(cfg: &PhishfeatConfig, url: &str) -> Result<()> {
    let extractor = build_extractor(cfg)?;
    let extraction = tokio::task::spawn_blocking({
        let url = url.to_string();
        move || extractor.extract(&url)
    })
    .await
    .context("inspect task join")?;
    print_extraction(url, &extraction);
    Ok(())
}
