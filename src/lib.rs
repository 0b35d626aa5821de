//! domain_rank library: ranked domain list import and title enrichment
//!
//! This library streams a compressed web-graph ranking feed into an ordered
//! domain list, then walks a window of that list and resolves a human-readable
//! title per domain, persisting `domain -> [rank, title]` after every entry.
//!
//! # Example
//!
//! ```no_run
//! use domain_rank::{run_enrich, run_import, EnrichOptions, ImportOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let import = run_import(ImportOptions {
//!     limit: 10_000,
//!     ..Default::default()
//! })
//! .await?;
//! println!("Imported {} domains", import.records);
//!
//! let enrich = run_enrich(EnrichOptions {
//!     start: 0,
//!     end: 100,
//!     ..Default::default()
//! })
//! .await?;
//! println!("Ranked {} domains", enrich.ranked);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod config;
pub mod error_handling;
pub mod humanize;
pub mod import;
pub mod initialization;
pub mod locator;
pub mod overrides;
pub mod store;
pub mod title;
mod utils;

// Re-export public API
pub use config::{EnrichOptions, ImportOptions, LogFormat, LogLevel};
pub use run::{
    lookup, run_enrich, run_import, run_locate, EnrichReport, ImportReport, LookupHit,
};

// Internal run module (contains the orchestration of each command)
mod run {
    use std::path::{Path, PathBuf};
    use std::time::Instant;

    use anyhow::{anyhow, Context, Result};
    use log::info;

    use crate::app::{normalize_lookup_target, registrable_domain};
    use crate::config::{EnrichOptions, ImportOptions};
    use crate::error_handling::Outcome;
    use crate::import::{import_to_file, load_domain_list, open_feed};
    use crate::initialization::{init_feed_client, init_page_client};
    use crate::locator::locate_archive;
    use crate::overrides::OverrideTable;
    use crate::store::{read_results, ResultStore};
    use crate::title::{Decision, PageTitleFetcher, TitleEngine};

    /// Results of an import run.
    #[derive(Debug, Clone)]
    pub struct ImportReport {
        /// Feed URL or local path that was read
        pub source: String,
        /// Path of the written domain list
        pub output: PathBuf,
        /// Records written
        pub records: usize,
        /// Malformed lines skipped
        pub skipped: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Results of an enrichment run.
    #[derive(Debug, Clone)]
    pub struct EnrichReport {
        /// First index processed (after clamping)
        pub start: usize,
        /// One past the last index processed (after clamping)
        pub end: usize,
        /// Domains that received a record
        pub ranked: usize,
        /// Domains on the removal list
        pub excluded: usize,
        /// Domains merged into their main domain
        pub merged: usize,
        /// Rank given to the first ranked domain of this run
        pub first_rank: Option<u32>,
        /// Rank given to the last ranked domain of this run
        pub last_rank: Option<u32>,
        /// Path to the result store
        pub results: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// A result store record found by [`lookup`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LookupHit {
        /// The key that matched (the host or its registrable domain)
        pub domain: String,
        pub rank: u32,
        pub title: String,
    }

    /// Discovers the current ranking archive URL from `index_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built or either page fetch or
    /// link search fails.
    pub async fn run_locate(index_url: &str, user_agent: &str) -> Result<String> {
        let client = init_feed_client(user_agent).context("Failed to initialize HTTP client")?;
        let url = locate_archive(&client, index_url)
            .await
            .context("Failed to locate ranking archive")?;
        info!("Located ranking archive: {}", url);
        Ok(url)
    }

    /// Streams the ranking feed into a fresh domain list.
    ///
    /// Without an explicit `source` the archive URL is discovered first.
    /// Any previous list at `options.output` is discarded.
    ///
    /// # Errors
    ///
    /// Upstream, decompression and storage failures abort the run.
    pub async fn run_import(options: ImportOptions) -> Result<ImportReport> {
        let start_time = Instant::now();
        let client =
            init_feed_client(&options.user_agent).context("Failed to initialize HTTP client")?;

        let source = match options.source {
            Some(source) => source,
            None => locate_archive(&client, &options.index_url)
                .await
                .context("Failed to locate ranking archive")?,
        };

        let reader = open_feed(&client, &source)
            .await
            .with_context(|| format!("Failed to open feed {source}"))?;
        let summary = import_to_file(reader, &options.output, options.limit, options.reverse)
            .await
            .with_context(|| format!("Failed to import feed {source}"))?;

        info!(
            "Imported {} domains ({} malformed lines skipped) into {:?}",
            summary.records, summary.skipped, options.output
        );

        Ok(ImportReport {
            source,
            output: options.output,
            records: summary.records,
            skipped: summary.skipped,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }

    /// Resolves titles for the `[start, end)` window of the domain list.
    ///
    /// A run starting at index 0 resets the result store; any other start
    /// resumes it, continuing ranks from the number of records present.
    /// Domains that already have a record are left untouched.
    ///
    /// # Errors
    ///
    /// Invalid options, an unreadable domain list or override table, and
    /// result store failures abort the run. Scrape failures never do.
    pub async fn run_enrich(options: EnrichOptions) -> Result<EnrichReport> {
        options.validate().context("Invalid enrichment options")?;
        let start_time = Instant::now();

        let domains = load_domain_list(&options.domains)
            .await
            .context("Failed to read domain list")?;
        let end = options.end.min(domains.len());
        let start = options.start.min(end);

        let overrides = OverrideTable::load_or_embedded(options.overrides.as_deref())
            .await
            .context("Failed to load override table")?;
        let client = init_page_client(&options.user_agent, options.timeout())
            .context("Failed to initialize HTTP client")?;
        let fetcher = PageTitleFetcher::new(
            client,
            options.page_url_template.clone(),
            options.timeout(),
        );
        let mut engine = TitleEngine::new(overrides, fetcher, options.delay());

        let mut store = ResultStore::open(&options.results, options.start == 0)
            .await
            .context("Failed to open result store")?;

        if start < end {
            info!("Processing domains from index {} to {}", start, end - 1);
        } else {
            info!(
                "Nothing to process: start {} is past the {} listed domains",
                options.start,
                domains.len()
            );
        }

        let mut next_rank = store.next_rank();
        let mut first_rank = None;
        let mut last_rank = None;

        for (offset, domain) in domains[start..end].iter().enumerate() {
            let position = start + offset + 1;

            if store.get(domain).is_some() {
                info!("Skipping {}: {} (already ranked)", position, domain);
                continue;
            }

            match engine.decide(domain, next_rank).await {
                Decision::Excluded => {
                    info!("Skipping {}: {} (marked for removal)", position, domain);
                }
                Decision::Merged { into } => {
                    info!(
                        "Skipping {}: {} (alternative domain for {})",
                        position, domain, into
                    );
                }
                Decision::Ranked { rank, title } => {
                    info!("Processing {}: {} -> {}", rank, domain, title);
                    store
                        .put(domain, rank, &title)
                        .await
                        .with_context(|| format!("Failed to persist result for {domain}"))?;
                    first_rank.get_or_insert(rank);
                    last_rank = Some(rank);
                    next_rank = rank + 1;
                }
            }
        }

        let stats = engine.into_stats();
        stats.log_summary();

        Ok(EnrichReport {
            start,
            end,
            ranked: stats.count(Outcome::Ranked),
            excluded: stats.count(Outcome::Excluded),
            merged: stats.count(Outcome::Merged),
            first_rank,
            last_rank,
            results: options.results,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }

    /// Looks up a URL or host in the result store, falling back to its
    /// registrable domain. Returns `Ok(None)` when neither is present.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot be normalized or the store cannot
    /// be read.
    pub async fn lookup(target: &str, results: &Path) -> Result<Option<LookupHit>> {
        let host = normalize_lookup_target(target)
            .ok_or_else(|| anyhow!("Invalid lookup target: {target}"))?;
        let entries = read_results(results)
            .await
            .context("Failed to read result store")?;

        let candidates = std::iter::once(host.clone()).chain(
            registrable_domain(&host).filter(|registrable| *registrable != host),
        );
        for candidate in candidates {
            if let Some((rank, title)) = entries.get(&candidate) {
                return Ok(Some(LookupHit {
                    domain: candidate,
                    rank: *rank,
                    title: title.clone(),
                }));
            }
        }
        Ok(None)
    }
}
