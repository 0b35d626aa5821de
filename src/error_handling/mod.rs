//! Error handling and run statistics.
//!
//! This module provides:
//! - Error type definitions for each stage of the pipeline
//! - Per-run outcome counters for the enrichment pass
//!
//! Errors from the locator, the import and the storage layer are fatal to the
//! current run. Scrape errors are recorded as outcomes and never propagate.

mod stats;
mod types;

// Re-export public API
pub use stats::EnrichStats;
pub use types::{
    ConfigError, ImportError, InitializationError, LocatorError, OverrideError, Outcome,
    ScrapeError, StorageError,
};
