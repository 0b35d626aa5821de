//! Ranking archive discovery.
//!
//! The web-graph index page links one page per published snapshot; each
//! snapshot page links the compressed host-rank archive. Two fetches, two
//! regex scans, no retries: a failure here is surfaced to the operator.

use std::sync::LazyLock;

use log::{debug, info};
use regex::Regex;
use reqwest::Client;
use url::Url;

use crate::config::{LOCATOR_TIMEOUT, RANK_ARCHIVE_FILENAME};
use crate::error_handling::LocatorError;
use crate::utils::compile_regex_unsafe;

// An anchor whose target carries a year-month token such as `2025-may`
const SNAPSHOT_LINK_PATTERN: &str = r#"href="([^"]*\d{4}-\w+[^"]*)""#;

static SNAPSHOT_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(SNAPSHOT_LINK_PATTERN, "SNAPSHOT_LINK_RE"));

static ARCHIVE_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r#"href="([^"]*{})""#, regex::escape(RANK_ARCHIVE_FILENAME));
    compile_regex_unsafe(&pattern, "ARCHIVE_LINK_RE")
});

/// Returns the absolute URL of the current ranking archive.
///
/// Fetches `index_url`, follows the first snapshot link found on it, and
/// returns the first link on the snapshot page whose target ends in the
/// archive file name. Relative links are resolved against the page they
/// appear on.
///
/// # Errors
///
/// - `LocatorError::Upstream` if either page answers with a non-success status
/// - `LocatorError::NotFound` if either pattern matches no anchor
/// - `LocatorError::Request` if either request fails outright
pub async fn locate_archive(client: &Client, index_url: &str) -> Result<String, LocatorError> {
    let index_html = fetch_page(client, index_url).await?;
    let snapshot_url = find_link(&index_html, &SNAPSHOT_LINK_RE, index_url).ok_or_else(|| {
        LocatorError::NotFound {
            url: index_url.to_string(),
            what: "snapshot",
        }
    })?;
    debug!("Snapshot page: {}", snapshot_url);

    let snapshot_html = fetch_page(client, &snapshot_url).await?;
    let archive_url =
        find_link(&snapshot_html, &ARCHIVE_LINK_RE, &snapshot_url).ok_or_else(|| {
            LocatorError::NotFound {
                url: snapshot_url.clone(),
                what: RANK_ARCHIVE_FILENAME,
            }
        })?;

    info!("Located ranking archive: {}", archive_url);
    Ok(archive_url)
}

async fn fetch_page(client: &Client, url: &str) -> Result<String, LocatorError> {
    let response = client
        .get(url)
        .timeout(LOCATOR_TIMEOUT)
        .send()
        .await
        .map_err(|source| LocatorError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LocatorError::Upstream {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(|source| LocatorError::Request {
        url: url.to_string(),
        source,
    })
}

/// First capture of `pattern` in `html`, resolved against `base`.
fn find_link(html: &str, pattern: &Regex, base: &str) -> Option<String> {
    pattern
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .find_map(|href| resolve_link(base, href.as_str()))
}

/// Resolves an anchor target against the page URL it was found on.
pub(crate) fn resolve_link(base: &str, href: &str) -> Option<String> {
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }
    let base = Url::parse(base).ok()?;
    base.join(href).ok().map(String::from)
}
