//! Best-effort page title scrape.

use std::sync::LazyLock;
use std::time::Duration;

use futures::StreamExt;
use log::debug;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::config::{DOMAIN_PLACEHOLDER, MAX_RESPONSE_BODY_SIZE};
use crate::error_handling::ScrapeError;
use crate::utils::parse_selector_unsafe;

static OG_TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe("meta[property='og:title']", "OG_TITLE_SELECTOR")
});

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("title", "TITLE_SELECTOR"));

/// Fetches one page per domain and extracts its raw title.
///
/// Owns the page client, the URL template and the per-page deadline. The
/// deadline covers the whole exchange, body included.
#[derive(Debug, Clone)]
pub struct PageTitleFetcher {
    client: Client,
    template: String,
    timeout: Duration,
}

impl PageTitleFetcher {
    pub fn new(client: Client, template: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            template: template.into(),
            timeout,
        }
    }

    /// The page URL for `domain`.
    pub fn page_url(&self, domain: &str) -> String {
        self.template.replace(DOMAIN_PLACEHOLDER, domain)
    }

    /// Fetches the page for `domain` and returns its raw (uncleaned) title.
    ///
    /// `Ok(None)` means the page loaded but carried no title.
    ///
    /// # Errors
    ///
    /// - `ScrapeError::Timeout` if the deadline passes
    /// - `ScrapeError::Status` on a non-success status
    /// - `ScrapeError::BodyTooLarge` if the body exceeds the size cap
    /// - `ScrapeError::Request` for any other transport failure
    pub async fn fetch_title(&self, domain: &str) -> Result<Option<String>, ScrapeError> {
        let url = self.page_url(domain);
        let body = match tokio::time::timeout(self.timeout, self.fetch_body(&url)).await {
            Ok(body) => body?,
            Err(_) => {
                return Err(ScrapeError::Timeout {
                    url,
                    after: self.timeout,
                })
            }
        };
        debug!("Body length for {domain}: {} bytes", body.len());
        Ok(extract_title(&body))
    }

    async fn fetch_body(&self, url: &str) -> Result<String, ScrapeError> {
        let request_error = |source: reqwest::Error| {
            if source.is_timeout() {
                ScrapeError::Timeout {
                    url: url.to_string(),
                    after: self.timeout,
                }
            } else {
                ScrapeError::Request {
                    url: url.to_string(),
                    source,
                }
            }
        };

        let response = self.client.get(url).send().await.map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status,
            });
        }

        let too_large = || ScrapeError::BodyTooLarge {
            url: url.to_string(),
            limit: MAX_RESPONSE_BODY_SIZE,
        };
        if response
            .content_length()
            .is_some_and(|len| len > MAX_RESPONSE_BODY_SIZE as u64)
        {
            return Err(too_large());
        }

        // Stream the body so an oversized page is abandoned early
        let mut body = Vec::new();
        let mut chunks = response.bytes_stream();
        while let Some(chunk) = chunks.next().await {
            let chunk = chunk.map_err(request_error)?;
            if body.len() + chunk.len() > MAX_RESPONSE_BODY_SIZE {
                return Err(too_large());
            }
            body.extend_from_slice(&chunk);
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// Extracts the Open Graph title, falling back to `<title>`.
///
/// Returns `None` when neither is present or both are blank.
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    let og_title = document
        .select(&OG_TITLE_SELECTOR)
        .filter_map(|element| element.value().attr("content"))
        .map(str::trim)
        .find(|content| !content.is_empty());
    if let Some(title) = og_title {
        return Some(title.to_string());
    }

    document
        .select(&TITLE_SELECTOR)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .find(|title| !title.is_empty())
}
