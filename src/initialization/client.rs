//! HTTP client initialization.
//!
//! Two clients are used: the feed client has no overall timeout because the
//! archive download is a long-lived stream, while the page client bounds every
//! request so an unresponsive host cannot stall enrichment.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::LOCATOR_TIMEOUT;
use crate::error_handling::InitializationError;

/// Initializes the client used for the locator pages and the archive stream.
///
/// Only the connect phase is bounded; the body of a multi-gigabyte archive is
/// read for as long as it keeps arriving.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_feed_client(user_agent: &str) -> Result<reqwest::Client, InitializationError> {
    ClientBuilder::new()
        .connect_timeout(LOCATOR_TIMEOUT)
        .user_agent(user_agent.to_string())
        .build()
        .map_err(InitializationError::from)
}

/// Initializes the client used for per-domain page scrapes.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from options
/// - Timeout covering connect, headers and body
/// - Redirect following (reqwest default of 10 hops)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_page_client(
    user_agent: &str,
    timeout: Duration,
) -> Result<reqwest::Client, InitializationError> {
    ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(user_agent.to_string())
        .build()
        .map_err(InitializationError::from)
}
