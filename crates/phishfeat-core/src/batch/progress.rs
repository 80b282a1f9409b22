//! Progress reporting for a batch run.

/// Snapshot sent after each completed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProgress {
    pub done: usize,
    pub total: usize,
}

impl BatchProgress {
    /// Fraction complete in [0.0, 1.0].
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        (self.done as f64 / self.total as f64).min(1.0)
    }
}

/// Totals for a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: usize,
    pub whois_failures: usize,
    pub fetch_failures: usize,
    /// Tasks that panicked; their rows carry the offline vector.
    pub panicked: usize,
    /// Tasks cancelled before returning; their rows carry the offline vector.
    pub cancelled: usize,
}
