//! `phishfeat extract [INPUT] [OUTPUT]` – batch feature extraction.

use anyhow::{Context, Result};
use phishfeat_core::batch::{self, BatchProgress};
use phishfeat_core::config::PhishfeatConfig;
use phishfeat_core::dataset;
use std::io::Write;
use std::path::Path;

use super::build_extractor;

pub async fn run_extract(cfg: &PhishfeatConfig, input: &Path, output: &Path) -> Result<()> {
    // Fails before any lookup when the URL column is missing.
    let ds = dataset::read_records(input)
        .with_context(|| format!("reading input {}", input.display()))?;
    let has_labels = ds.has_labels;
    tracing::info!(
        input = %input.display(),
        urls = ds.len(),
        has_labels,
        "loaded input"
    );

    let extractor = build_extractor(cfg)?;

    let (progress_tx, mut progress_rx) = tokio::sync::mpsc::channel::<BatchProgress>(16);
    let progress_handle = tokio::spawn(async move {
        let mut stderr = std::io::stderr();
        while let Some(p) = progress_rx.recv().await {
            let _ = write!(
                stderr,
                "\rExtracting features: {}/{} ({:.0}%)",
                p.done,
                p.total,
                p.fraction() * 100.0
            );
            let _ = stderr.flush();
        }
        let _ = writeln!(stderr);
    });

    let out = batch::run_batch(&extractor, ds.records, cfg.workers, Some(progress_tx)).await;
    let _ = progress_handle.await;

    dataset::write_rows(output, &out.rows, has_labels)
        .with_context(|| format!("writing output {}", output.display()))?;

    tracing::info!(
        output = %output.display(),
        rows = out.summary.rows,
        whois_failures = out.summary.whois_failures,
        fetch_failures = out.summary.fetch_failures,
        "extraction written"
    );
    println!(
        "Feature extraction complete. The extracted features are saved in '{}'.",
        output.display()
    );
    Ok(())
}
