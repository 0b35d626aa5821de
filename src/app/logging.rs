//! Progress logging utilities.

use std::time::Instant;

use log::info;

/// Logs how many records have been processed and the average rate.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `processed` - Records processed so far
pub fn log_progress(start_time: Instant, processed: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        processed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {} records in {:.2} seconds (~{:.2} records/sec)",
        processed, elapsed_secs, rate
    );
}

/// Throttles progress lines to at most one per interval.
#[derive(Debug)]
pub struct ProgressTicker {
    start: Instant,
    last: Instant,
    interval: std::time::Duration,
}

impl ProgressTicker {
    pub fn new(interval: std::time::Duration) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            interval,
        }
    }

    /// Logs progress if the interval has elapsed since the last line.
    pub fn tick(&mut self, processed: usize) {
        if self.last.elapsed() >= self.interval {
            log_progress(self.start, processed);
            self.last = Instant::now();
        }
    }

    /// Logs a final progress line unconditionally.
    pub fn finish(&self, processed: usize) {
        log_progress(self.start, processed);
    }
}
