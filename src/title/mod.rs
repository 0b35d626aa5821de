//! Title resolution engine.
//!
//! For each domain the engine returns one [`Decision`]:
//! 1. removed domains are `Excluded`
//! 2. alternates of an alias group are `Merged` into their main domain
//! 3. everything else is `Ranked` with a title taken from the override
//!    table, or reconciled between the humanized domain name and a scraped
//!    page title, or finally the domain itself
//!
//! The rank is supplied by the caller and only consumed by `Ranked`, so
//! skipped domains never leave gaps.

mod clean;
mod scrape;

use std::time::Duration;

use log::{debug, warn};

use crate::config::MAX_SCRAPED_TITLE_WORDS;
use crate::error_handling::{EnrichStats, Outcome, ScrapeError};
use crate::humanize::title_from_domain;
use crate::overrides::OverrideTable;
use crate::utils::word_count;

pub use clean::{clean_scraped_title, strip_home_remnants};
pub use scrape::{extract_title, PageTitleFetcher};

/// What the engine decided for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// On the removal list; no record, no rank.
    Excluded,
    /// Alternate of `into`; no record, no rank.
    Merged { into: String },
    /// Gets a record with the supplied rank.
    Ranked { rank: u32, title: String },
}

/// Chooses between the humanized and the scraped title.
///
/// A cleaned scraped title with fewer than three words replaces the heuristic
/// one; longer scraped titles are discarded.
pub fn reconcile(heuristic: Option<String>, scraped: Option<String>) -> Option<String> {
    match scraped {
        Some(title) if word_count(&title) < MAX_SCRAPED_TITLE_WORDS => Some(title),
        _ => heuristic,
    }
}

/// Sequential decision maker holding the curated tables, the page fetcher and
/// the run's outcome counters.
pub struct TitleEngine {
    overrides: OverrideTable,
    fetcher: PageTitleFetcher,
    delay: Duration,
    stats: EnrichStats,
    scraped_once: bool,
}

impl TitleEngine {
    /// `delay` is waited between two consecutive scrape attempts.
    pub fn new(overrides: OverrideTable, fetcher: PageTitleFetcher, delay: Duration) -> Self {
        Self {
            overrides,
            fetcher,
            delay,
            stats: EnrichStats::new(),
            scraped_once: false,
        }
    }

    /// Decides the fate of `domain`. `next_rank` is used only if the result
    /// is `Decision::Ranked`.
    ///
    /// Scrape failures are contained here and never surface as errors.
    pub async fn decide(&mut self, domain: &str, next_rank: u32) -> Decision {
        if self.overrides.is_removed(domain) {
            self.stats.record(Outcome::Excluded);
            return Decision::Excluded;
        }
        if let Some(main) = self.overrides.main_for(domain) {
            let into = main.to_string();
            self.stats.record(Outcome::Merged);
            return Decision::Merged { into };
        }

        let title = self.resolve_title(domain).await;
        self.stats.record(Outcome::Ranked);
        Decision::Ranked {
            rank: next_rank,
            title,
        }
    }

    pub fn stats(&self) -> &EnrichStats {
        &self.stats
    }

    pub fn into_stats(self) -> EnrichStats {
        self.stats
    }

    async fn resolve_title(&mut self, domain: &str) -> String {
        if let Some(title) = self.overrides.title_for(domain) {
            self.stats.record(Outcome::TitleOverride);
            return title.to_string();
        }

        let heuristic = title_from_domain(domain);
        let scraped = self.scrape(domain).await;
        let scraped_won = scraped
            .as_deref()
            .is_some_and(|t| word_count(t) < MAX_SCRAPED_TITLE_WORDS);

        match reconcile(heuristic, scraped) {
            Some(title) if scraped_won => {
                self.stats.record(Outcome::TitleScraped);
                title
            }
            Some(title) => {
                self.stats.record(Outcome::TitleHeuristic);
                title
            }
            None => {
                self.stats.record(Outcome::TitleFallback);
                domain.to_string()
            }
        }
    }

    /// One throttled scrape; returns the cleaned title or `None`.
    async fn scrape(&mut self, domain: &str) -> Option<String> {
        if self.scraped_once && !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.scraped_once = true;

        match self.fetcher.fetch_title(domain).await {
            Ok(Some(raw)) => match clean_scraped_title(&raw) {
                Some(title) => {
                    if word_count(&title) >= MAX_SCRAPED_TITLE_WORDS {
                        debug!("Scraped title for {domain} too long: {title}");
                        self.stats.record(Outcome::ScrapeRejectedLong);
                    }
                    Some(title)
                }
                None => {
                    self.stats.record(Outcome::ScrapeEmpty);
                    None
                }
            },
            Ok(None) => {
                self.stats.record(Outcome::ScrapeEmpty);
                None
            }
            Err(e @ ScrapeError::Timeout { .. }) => {
                warn!("Could not get source title for {domain}: {e}");
                self.stats.record(Outcome::ScrapeTimeout);
                None
            }
            Err(e) => {
                debug!("Could not get source title for {domain}: {e}");
                self.stats.record(Outcome::ScrapeFailed);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
