//! Main application modules.
//!
//! This module provides progress logging and lookup-target normalization used
//! by the run functions and the binary.

pub mod logging;
pub mod target;

// Re-export public API
pub use logging::ProgressTicker;
pub use target::{normalize_lookup_target, registrable_domain};
