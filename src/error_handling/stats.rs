//! Enrichment outcome tracking.
//!
//! Counts what happened to each domain of a run so the final summary can
//! report dispositions, title sources and scrape failures side by side.

use std::collections::HashMap;

use log::info;
use strum::IntoEnumIterator;

use super::types::Outcome;

/// Per-run outcome counters.
///
/// All outcomes are initialized to zero on creation. The enrichment pass is
/// sequential, so the counters are plain integers owned by the run.
#[derive(Debug, Clone)]
pub struct EnrichStats {
    counts: HashMap<Outcome, usize>,
}

impl Default for EnrichStats {
    fn default() -> Self {
        Self::new()
    }
}

impl EnrichStats {
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for outcome in Outcome::iter() {
            counts.insert(outcome, 0);
        }
        EnrichStats { counts }
    }

    pub fn record(&mut self, outcome: Outcome) {
        *self.counts.entry(outcome).or_insert(0) += 1;
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    /// Number of domains considered (every domain has exactly one disposition).
    pub fn total_domains(&self) -> usize {
        Outcome::iter()
            .filter(Outcome::is_disposition)
            .map(|o| self.count(o))
            .sum()
    }

    /// Logs every non-zero counter.
    pub fn log_summary(&self) {
        info!("Outcome counts ({} domains):", self.total_domains());
        for outcome in Outcome::iter() {
            let count = self.count(outcome);
            if count > 0 {
                info!("   {}: {}", outcome.as_str(), count);
            }
        }
    }
}
