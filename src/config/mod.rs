//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (URLs, feed layout, timeouts, limits)
//! - CLI option types and parsing
//! - Library-level option structs for the import and enrichment runs

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{
    Cli, Command, EnrichArgs, EnrichOptions, ImportArgs, ImportOptions, LocateArgs, LogFormat,
    LogLevel, LookupArgs,
};
