//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger
//! - HTTP clients for the feed and for page scrapes

mod client;
mod logger;

// Re-export public API
pub use client::{init_feed_client, init_page_client};
pub use logger::init_logger_with;
