//! Error type definitions.
//!
//! This module defines the error families used across the pipeline. Bulk-stage
//! errors (`LocatorError`, `ImportError`, `StorageError`) are fatal to a run;
//! `ScrapeError` is always contained to a single domain by the title engine.

use std::path::PathBuf;
use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Invalid option combinations, detected before a run starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("start index {start} is past end index {end}")]
    InvertedRange { start: usize, end: usize },

    #[error("scrape timeout must be at least one second")]
    ZeroTimeout,

    #[error("page URL template '{0}' has no {{domain}} placeholder")]
    MissingPlaceholder(String),
}

/// Failures while discovering the ranking archive URL.
#[derive(Error, Debug)]
pub enum LocatorError {
    /// A page fetch returned a non-success status.
    #[error("{url} returned HTTP {status}")]
    Upstream { url: String, status: StatusCode },

    /// The expected anchor was not present in the fetched markup.
    #[error("no {what} link found on {url}")]
    NotFound { url: String, what: &'static str },

    /// The request itself failed (connect, timeout, body read).
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: ReqwestError,
    },
}

/// Failures of the streaming import. All of them abort the run.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The archive fetch returned a non-success status.
    #[error("{url} returned HTTP {status}")]
    Upstream { url: String, status: StatusCode },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: ReqwestError,
    },

    #[error("could not locate the ranking archive: {0}")]
    Locate(#[from] LocatorError),

    /// The byte stream broke or the gzip payload was corrupt.
    #[error("failed to read or decompress feed: {0}")]
    Decompress(#[source] std::io::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Failures of the per-domain page scrape. Never fatal.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("{url} timed out after {after:?}")]
    Timeout { url: String, after: Duration },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: ReqwestError,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("{url} body exceeds {limit} bytes")]
    BodyTooLarge { url: String, limit: usize },
}

/// Failures reading or writing the persisted artifacts.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path:?} is not a valid result store: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Problems with the curated removal/alias/title table.
#[derive(Error, Debug)]
pub enum OverrideError {
    #[error("failed to read override table {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("override table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A domain listed as an alternate of two different main domains.
    #[error("{alt} is an alias of both {first} and {second}")]
    DuplicateAlias {
        alt: String,
        first: String,
        second: String,
    },

    /// A main domain listed among its own alternates.
    #[error("{0} is listed as an alias of itself")]
    SelfAlias(String),
}

/// What happened to one domain during an enrichment run.
///
/// Every domain produces exactly one disposition (`Ranked`, `Excluded` or
/// `Merged`); ranked domains additionally record where their title came from
/// and, when a scrape was attempted, how it went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum Outcome {
    // Dispositions
    Ranked,
    Excluded,
    Merged,
    // Title sources
    TitleOverride,
    TitleScraped,
    TitleHeuristic,
    TitleFallback,
    // Scrape results
    ScrapeRejectedLong,
    ScrapeEmpty,
    ScrapeTimeout,
    ScrapeFailed,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Ranked => "Ranked",
            Outcome::Excluded => "Excluded (removal list)",
            Outcome::Merged => "Merged into main domain",
            Outcome::TitleOverride => "Title from override table",
            Outcome::TitleScraped => "Title from page",
            Outcome::TitleHeuristic => "Title from domain name",
            Outcome::TitleFallback => "Title fell back to domain",
            Outcome::ScrapeRejectedLong => "Scraped title too long, kept heuristic",
            Outcome::ScrapeEmpty => "Page had no usable title",
            Outcome::ScrapeTimeout => "Scrape timed out",
            Outcome::ScrapeFailed => "Scrape failed",
        }
    }

    /// Whether this outcome is one of the three per-domain dispositions.
    pub fn is_disposition(&self) -> bool {
        matches!(self, Outcome::Ranked | Outcome::Excluded | Outcome::Merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_outcome_as_str_is_unique() {
        let mut seen = std::collections::HashSet::new();
        for outcome in Outcome::iter() {
            assert!(
                seen.insert(outcome.as_str()),
                "duplicate label for {:?}",
                outcome
            );
        }
    }

    #[test]
    fn test_outcome_display_matches_as_str() {
        for outcome in Outcome::iter() {
            assert_eq!(outcome.to_string(), outcome.as_str());
        }
    }

    #[test]
    fn test_exactly_three_dispositions() {
        assert_eq!(Outcome::iter().filter(|o| o.is_disposition()).count(), 3);
    }

    #[test]
    fn test_locator_error_messages() {
        let err = LocatorError::NotFound {
            url: "https://commoncrawl.org/web-graphs".to_string(),
            what: "snapshot",
        };
        assert_eq!(
            err.to_string(),
            "no snapshot link found on https://commoncrawl.org/web-graphs"
        );

        let err = LocatorError::Upstream {
            url: "https://commoncrawl.org/web-graphs".to_string(),
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_config_error_placeholder_message() {
        let err = ConfigError::MissingPlaceholder("https://x".to_string());
        assert_eq!(
            err.to_string(),
            "page URL template 'https://x' has no {domain} placeholder"
        );
    }

    #[test]
    fn test_import_error_wraps_storage() {
        let err: ImportError = StorageError::Write {
            path: PathBuf::from("/tmp/out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert!(matches!(err, ImportError::Storage(_)));
        assert!(err.to_string().contains("out.txt"));
    }
}
