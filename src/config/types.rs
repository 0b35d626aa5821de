//! Configuration types and CLI options.
//!
//! This module defines the `clap` command tree used by the binary and the
//! plain option structs used by the library. The library structs carry no CLI
//! dependency and can be built programmatically with `..Default::default()`.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_DOMAINS_PATH, DEFAULT_ENRICH_END, DEFAULT_ENRICH_START, DEFAULT_IMPORT_LIMIT,
    DEFAULT_INDEX_URL, DEFAULT_PAGE_URL_TEMPLATE, DEFAULT_RESULTS_PATH, DEFAULT_USER_AGENT,
    DOMAIN_PLACEHOLDER, SCRAPE_DELAY_MS, SCRAPE_TIMEOUT_SECS,
};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Find the current ranking archive
/// domain_rank locate
///
/// # Keep the top 100k hosts
/// domain_rank import --limit 100000
///
/// # Title the first thousand, then resume
/// domain_rank enrich --start 0 --end 1000
/// domain_rank enrich --start 1000 --end 2000
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "domain_rank",
    about = "Builds a ranked domain list and enriches it with source titles."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands, one per pipeline stage.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the URL of the current ranking archive
    Locate(LocateArgs),
    /// Stream the ranking archive into the ordered domain list
    Import(ImportArgs),
    /// Resolve titles for a slice of the domain list
    Enrich(EnrichArgs),
    /// Print the rank and title stored for a URL or domain
    Lookup(LookupArgs),
}

#[derive(Debug, Args)]
pub struct LocateArgs {
    /// Index page listing the snapshots
    #[arg(long, default_value = DEFAULT_INDEX_URL)]
    pub index_url: String,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Archive URL or local .gz path (discovered from the index page when omitted)
    #[arg(long)]
    pub source: Option<String>,

    /// Index page used when no source is given
    #[arg(long, default_value = DEFAULT_INDEX_URL)]
    pub index_url: String,

    /// Maximum number of records to keep
    #[arg(long, default_value_t = DEFAULT_IMPORT_LIMIT)]
    pub limit: usize,

    /// Output path for the domain list
    #[arg(long, value_parser, default_value = DEFAULT_DOMAINS_PATH)]
    pub output: PathBuf,

    /// Keep host labels in feed order instead of reversing them
    #[arg(long)]
    pub no_reverse: bool,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

#[derive(Debug, Args)]
pub struct EnrichArgs {
    /// First index of the domain list to process (inclusive)
    #[arg(long, default_value_t = DEFAULT_ENRICH_START)]
    pub start: usize,

    /// Last index of the domain list to process (exclusive)
    #[arg(long, default_value_t = DEFAULT_ENRICH_END)]
    pub end: usize,

    /// Domain list produced by `import`
    #[arg(long, value_parser, default_value = DEFAULT_DOMAINS_PATH)]
    pub domains: PathBuf,

    /// Result store (JSON)
    #[arg(long, value_parser, default_value = DEFAULT_RESULTS_PATH)]
    pub results: PathBuf,

    /// Curated removal/alias/title table (JSON); the embedded table is used when omitted
    #[arg(long, value_parser)]
    pub overrides: Option<PathBuf>,

    /// Per-page scrape timeout in seconds
    #[arg(long, default_value_t = SCRAPE_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Pause between scrape attempts in milliseconds
    #[arg(long, default_value_t = SCRAPE_DELAY_MS)]
    pub delay_ms: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Page fetched per domain; `{domain}` is substituted
    #[arg(long, default_value = DEFAULT_PAGE_URL_TEMPLATE)]
    pub page_url_template: String,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// URL or bare domain
    pub target: String,

    /// Result store (JSON)
    #[arg(long, value_parser, default_value = DEFAULT_RESULTS_PATH)]
    pub results: PathBuf,
}

/// Options for one import run.
///
/// # Examples
///
/// ```no_run
/// use domain_rank::ImportOptions;
///
/// let options = ImportOptions {
///     source: Some("./snapshots/domain-ranks.txt.gz".to_string()),
///     limit: 10_000,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Archive URL or local path; `None` runs the locator first
    pub source: Option<String>,
    /// Index page handed to the locator
    pub index_url: String,
    /// Maximum number of records written
    pub limit: usize,
    /// Destination of the domain list
    pub output: PathBuf,
    /// Reverse dot-separated labels of every record
    pub reverse: bool,
    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            source: None,
            index_url: DEFAULT_INDEX_URL.to_string(),
            limit: DEFAULT_IMPORT_LIMIT,
            output: PathBuf::from(DEFAULT_DOMAINS_PATH),
            reverse: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<ImportArgs> for ImportOptions {
    fn from(args: ImportArgs) -> Self {
        Self {
            source: args.source,
            index_url: args.index_url,
            limit: args.limit,
            output: args.output,
            reverse: !args.no_reverse,
            user_agent: args.user_agent,
        }
    }
}

/// Options for one enrichment run over `[start, end)`.
#[derive(Debug, Clone)]
pub struct EnrichOptions {
    /// First index (inclusive); `0` truncates the result store
    pub start: usize,
    /// Last index (exclusive); clamped to the list length
    pub end: usize,
    /// Domain list produced by the import
    pub domains: PathBuf,
    /// Result store path
    pub results: PathBuf,
    /// Curated table path; `None` uses the embedded table
    pub overrides: Option<PathBuf>,
    /// Per-page scrape timeout in seconds
    pub timeout_seconds: u64,
    /// Pause between scrape attempts in milliseconds
    pub delay_ms: u64,
    /// HTTP User-Agent header value
    pub user_agent: String,
    /// Page fetched per domain
    pub page_url_template: String,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        Self {
            start: DEFAULT_ENRICH_START,
            end: DEFAULT_ENRICH_END,
            domains: PathBuf::from(DEFAULT_DOMAINS_PATH),
            results: PathBuf::from(DEFAULT_RESULTS_PATH),
            overrides: None,
            timeout_seconds: SCRAPE_TIMEOUT_SECS,
            delay_ms: SCRAPE_DELAY_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_url_template: DEFAULT_PAGE_URL_TEMPLATE.to_string(),
        }
    }
}

impl From<EnrichArgs> for EnrichOptions {
    fn from(args: EnrichArgs) -> Self {
        Self {
            start: args.start,
            end: args.end,
            domains: args.domains,
            results: args.results,
            overrides: args.overrides,
            timeout_seconds: args.timeout_seconds,
            delay_ms: args.delay_ms,
            user_agent: args.user_agent,
            page_url_template: args.page_url_template,
        }
    }
}

impl EnrichOptions {
    /// Checks the option combination before any file is touched.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for an inverted range, a zero timeout, or a page
    /// URL template without the `{domain}` placeholder.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start > self.end {
            return Err(ConfigError::InvertedRange {
                start: self.start,
                end: self.end,
            });
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if !self.page_url_template.contains(DOMAIN_PLACEHOLDER) {
            return Err(ConfigError::MissingPlaceholder(
                self.page_url_template.clone(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_import_options_default() {
        let options = ImportOptions::default();
        assert_eq!(options.limit, 1_000_000);
        assert!(options.reverse);
        assert!(options.source.is_none());
        assert_eq!(options.output, PathBuf::from("./data/domains-1m.txt"));
    }

    #[test]
    fn test_enrich_options_default_is_valid() {
        let options = EnrichOptions::default();
        assert_eq!(options.start, 0);
        assert_eq!(options.end, 1000);
        assert_eq!(options.timeout(), Duration::from_secs(5));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_enrich_options_rejects_inverted_range() {
        let options = EnrichOptions {
            start: 10,
            end: 5,
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(ConfigError::InvertedRange { start: 10, end: 5 })
        ));
    }

    #[test]
    fn test_enrich_options_rejects_zero_timeout() {
        let options = EnrichOptions {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(matches!(options.validate(), Err(ConfigError::ZeroTimeout)));
    }

    #[test]
    fn test_enrich_options_rejects_template_without_placeholder() {
        let options = EnrichOptions {
            page_url_template: "https://example.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(ConfigError::MissingPlaceholder(_))
        ));
    }

    #[test]
    fn test_cli_parses_enrich_range() {
        let cli = Cli::parse_from([
            "domain_rank",
            "enrich",
            "--start",
            "800",
            "--end",
            "2000",
            "--delay-ms",
            "0",
        ]);
        match cli.command {
            Command::Enrich(args) => {
                let options = EnrichOptions::from(args);
                assert_eq!(options.start, 800);
                assert_eq!(options.end, 2000);
                assert_eq!(options.delay(), Duration::ZERO);
            }
            other => panic!("expected enrich, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_no_reverse_flag() {
        let cli = Cli::parse_from(["domain_rank", "import", "--no-reverse", "--limit", "5"]);
        match cli.command {
            Command::Import(args) => {
                let options = ImportOptions::from(args);
                assert!(!options.reverse);
                assert_eq!(options.limit, 5);
            }
            other => panic!("expected import, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_global_log_level_after_subcommand() {
        let cli = Cli::parse_from(["domain_rank", "locate", "--log-level", "debug"]);
        assert!(matches!(cli.log_level, LogLevel::Debug));
    }
}
