//! Bounded concurrent batch driver.
//!
//! Keeps up to `workers` blocking extraction tasks in flight; when one
//! finishes, the next record is started until the input is exhausted.
//! Rows come back in completion order.

mod progress;

pub use progress::{BatchProgress, BatchSummary};

use std::collections::HashMap;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::dataset::{FeatureRow, UrlRecord};
use crate::extract::{Extraction, FeatureExtractor};
use crate::heuristics::FeatureVector;

/// Extracted rows plus failure totals.
#[derive(Debug, Clone, Default)]
pub struct BatchOutput {
    pub rows: Vec<FeatureRow>,
    pub summary: BatchSummary,
}

impl BatchOutput {
    fn push(&mut self, record: UrlRecord, extraction: Extraction) {
        if extraction.whois_failed {
            self.summary.whois_failures += 1;
        }
        if extraction.fetch_failed {
            self.summary.fetch_failures += 1;
        }
        self.rows.push(FeatureRow {
            url: record.url,
            features: extraction.features,
            label: record.label,
        });
    }
}

/// Result of a task that never returned: every lookup counted as failed.
fn offline_extraction(url: &str) -> Extraction {
    Extraction {
        features: FeatureVector::offline(url),
        whois_failed: true,
        fetch_failed: true,
    }
}

async fn report(tx: &Option<mpsc::Sender<BatchProgress>>, done: usize, total: usize) {
    if let Some(tx) = tx {
        let _ = tx.send(BatchProgress { done, total }).await;
    }
}

/// Extracts features for every record with bounded parallelism.
///
/// Each record yields exactly one row. A task that panics or is cancelled
/// is logged and its row gets the offline vector computed from the URL
/// string; those rows are appended once the pool drains. Progress is sent to
/// `progress_tx` after every row; a closed receiver is ignored.
pub async fn run_batch(
    extractor: &FeatureExtractor,
    records: Vec<UrlRecord>,
    workers: usize,
    progress_tx: Option<mpsc::Sender<BatchProgress>>,
) -> BatchOutput {
    let workers = workers.max(1);
    let total = records.len();
    let mut pending = records.into_iter().enumerate();
    // Records whose task has not returned a row yet, by input index.
    let mut in_flight: HashMap<usize, UrlRecord> = HashMap::new();
    let mut join_set: JoinSet<(usize, Extraction)> = JoinSet::new();
    let mut output = BatchOutput {
        rows: Vec::with_capacity(total),
        summary: BatchSummary::default(),
    };

    tracing::info!(total, workers, "batch extraction started");

    loop {
        while join_set.len() < workers {
            let Some((idx, record)) = pending.next() else {
                break;
            };
            let extractor = extractor.clone();
            let url = record.url.clone();
            in_flight.insert(idx, record);
            join_set.spawn_blocking(move || (idx, extractor.extract(&url)));
        }

        let Some(joined) = join_set.join_next().await else {
            break;
        };

        match joined {
            Ok((idx, extraction)) => {
                if let Some(record) = in_flight.remove(&idx) {
                    output.push(record, extraction);
                    report(&progress_tx, output.rows.len(), total).await;
                }
            }
            Err(err) if err.is_panic() => {
                output.summary.panicked += 1;
                tracing::error!("extraction task panicked: {}", err);
            }
            Err(err) => {
                output.summary.cancelled += 1;
                tracing::error!("extraction task cancelled: {}", err);
            }
        }
    }

    let mut lost: Vec<(usize, UrlRecord)> = in_flight.into_iter().collect();
    lost.sort_by_key(|(idx, _)| *idx);
    for (_, record) in lost {
        tracing::warn!(url = %record.url, "no result for record; using offline features");
        let extraction = offline_extraction(&record.url);
        output.push(record, extraction);
        report(&progress_tx, output.rows.len(), total).await;
    }

    output.summary.rows = output.rows.len();
    tracing::info!(
        rows = output.summary.rows,
        whois_failures = output.summary.whois_failures,
        fetch_failures = output.summary.fetch_failures,
        panicked = output.summary.panicked,
        cancelled = output.summary.cancelled,
        "batch extraction finished"
    );
    output
}
