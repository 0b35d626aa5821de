//! Configuration constants.
//!
//! Every default used by the locator, the import pipeline and the enrichment
//! pass lives here so the numbers can be tuned in one place.

use std::time::Duration;

// Remote list discovery
/// Index page listing the published web-graph snapshots.
pub const DEFAULT_INDEX_URL: &str = "https://commoncrawl.org/web-graphs";
/// File name of the host-level ranking archive inside a snapshot page.
pub const RANK_ARCHIVE_FILENAME: &str = "domain-ranks.txt.gz";
/// Timeout for each of the two locator page fetches.
pub const LOCATOR_TIMEOUT: Duration = Duration::from_secs(10);

// Feed layout
/// Marker token found in the header row of the ranking feed.
pub const HEADER_SENTINEL: &str = "#host_rev";
/// Zero-based column holding the (reversed) host name.
pub const DOMAIN_FIELD_INDEX: usize = 4;

// Import output
/// Default number of records kept from the feed.
pub const DEFAULT_IMPORT_LIMIT: usize = 1_000_000;
/// Default location of the persisted domain sequence.
pub const DEFAULT_DOMAINS_PATH: &str = "./data/domains-1m.txt";
/// Separator between labels in the persisted domain sequence.
pub const DOMAIN_LIST_DELIMITER: &str = ",";
/// Minimum time between two progress lines during import.
pub const PROGRESS_INTERVAL: Duration = Duration::from_secs(5);

// Enrichment
/// Default location of the enrichment result store.
pub const DEFAULT_RESULTS_PATH: &str = "./data/domain-info.json";
/// Default slice of the domain sequence processed by one `enrich` run.
pub const DEFAULT_ENRICH_START: usize = 0;
pub const DEFAULT_ENRICH_END: usize = 1000;
/// Per-page timeout for the title scrape, in seconds.
pub const SCRAPE_TIMEOUT_SECS: u64 = 5;
/// Pause between two scrape attempts, in milliseconds.
pub const SCRAPE_DELAY_MS: u64 = 250;
/// Template for the page fetched per domain. `{domain}` is substituted.
pub const DEFAULT_PAGE_URL_TEMPLATE: &str = "https://{domain}";
/// Placeholder replaced in the page URL template.
pub const DOMAIN_PLACEHOLDER: &str = "{domain}";

/// Default User-Agent string for page and feed requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Response and title limits
/// Maximum scraped body size in bytes (2MB)
/// Pages larger than this are abandoned and treated as a failed scrape
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;
/// Maximum length of a cleaned scraped title, in characters.
pub const MAX_TITLE_LENGTH: usize = 150;
/// A breadcrumb segment must be longer than this to replace the full title.
pub const MIN_BREADCRUMB_SEGMENT_LENGTH: usize = 10;
/// Scraped titles with this many words or more lose to the heuristic title.
pub const MAX_SCRAPED_TITLE_WORDS: usize = 3;
/// Humanized titles shorter than this (spaces ignored) are upper-cased whole.
pub const SHORT_ACRONYM_THRESHOLD: usize = 5;
