//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_rank` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_rank::config::{Cli, Command};
use domain_rank::initialization::init_logger_with;
use domain_rank::{lookup, run_enrich, run_import, run_locate};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), e.g. RUST_LOG
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.into(), cli.log_format)
        .context("Failed to initialize logger")?;

    if let Err(e) = dispatch(cli.command).await {
        eprintln!("domain_rank error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Locate(args) => {
            let url = run_locate(&args.index_url, domain_rank::config::DEFAULT_USER_AGENT).await?;
            println!("{url}");
        }
        Command::Import(args) => {
            let report = run_import(args.into()).await?;
            println!(
                "✅ Imported {} domain{} ({} malformed line{} skipped) in {:.1}s",
                report.records,
                if report.records == 1 { "" } else { "s" },
                report.skipped,
                if report.skipped == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            println!("Domain list saved in {}", report.output.display());
        }
        Command::Enrich(args) => {
            let report = run_enrich(args.into()).await?;
            let ranks = match (report.first_rank, report.last_rank) {
                (Some(first), Some(last)) => format!(", ranks {first}-{last}"),
                _ => String::new(),
            };
            println!(
                "✅ Processed domains {}..{}: {} ranked, {} removed, {} merged{} in {:.1}s",
                report.start,
                report.end,
                report.ranked,
                report.excluded,
                report.merged,
                ranks,
                report.elapsed_seconds
            );
            println!("Results saved in {}", report.results.display());
        }
        Command::Lookup(args) => match lookup(&args.target, &args.results).await? {
            Some(hit) => println!("{}\t{}", hit.rank, hit.title),
            None => {
                eprintln!("{} is not in {}", args.target, args.results.display());
                process::exit(1);
            }
        },
    }
    Ok(())
}
