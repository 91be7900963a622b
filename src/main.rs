//! Linkrake main entry point
//!
//! Command-line interface for the depth-bounded link harvester.

use clap::Parser;
use linkrake::blacklist::Blacklist;
use linkrake::config::{read_blacklist, read_seeds, Config};
use linkrake::crawler::crawl;
use linkrake::report::{write_flat, write_json, DEFAULT_RESULT_PATH};
use linkrake::url::CanonicalMode;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Linkrake: a depth-bounded link harvester
///
/// Renders every seed URL, collects the outbound links of each page,
/// canonicalizes and deduplicates them, filters blacklisted entries, and
/// repeats on the surviving links until the configured depth is reached or
/// nothing new is left to render.
#[derive(Parser, Debug)]
#[command(name = "linkrake")]
#[command(version)]
#[command(about = "A depth-bounded link harvester", long_about = None)]
struct Cli {
    /// Path to the newline-delimited seed list; a built-in default seed is
    /// used when omitted
    #[arg(short, long, value_name = "FILE")]
    seeds: Option<PathBuf>,

    /// Where to write the results
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_RESULT_PATH)]
    output: PathBuf,

    /// Path to the newline-delimited blacklist; treated as empty when
    /// missing
    #[arg(short, long, value_name = "FILE")]
    blacklist: Option<PathBuf>,

    /// Maximum crawl depth; depth 1 is the seed round itself
    #[arg(short = 'd', long, default_value_t = 1)]
    max_depth: u32,

    /// Keep full canonical URLs instead of reducing them to their
    /// origin-only base form
    #[arg(long)]
    full: bool,

    /// Write the full nested report as JSON instead of a flat URL list
    #[arg(long)]
    json: bool,

    /// Maximum concurrent renders within one depth
    #[arg(long, default_value_t = 4)]
    fan_out: usize,

    /// Per-render timeout in seconds
    #[arg(long, default_value_t = 30, value_name = "SECONDS")]
    render_timeout: u64,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress the result echo and non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // A missing explicit seed list is the one fatal input error; it aborts
    // here, before anything is rendered or written.
    let seeds = read_seeds(cli.seeds.as_deref())?;
    tracing::info!("loaded {} seed target(s)", seeds.len());

    let blacklist = Blacklist::new(read_blacklist(cli.blacklist.as_deref()));
    if !blacklist.is_empty() {
        tracing::info!("blacklist has {} entries", blacklist.len());
    }

    let config = Config {
        max_depth: cli.max_depth,
        mode: if cli.full {
            CanonicalMode::Full
        } else {
            CanonicalMode::Base
        },
        fan_out: cli.fan_out,
        render_timeout: Duration::from_secs(cli.render_timeout),
    };

    let report = crawl(config, seeds, blacklist).await?;

    if cli.json {
        write_json(&report, &cli.output)?;
    } else {
        write_flat(&report, &cli.output)?;
    }

    if !cli.quiet {
        for url in report.all_urls() {
            println!("{}", url);
        }
        println!("results written to {}", cli.output.display());
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linkrake=info,warn"),
            1 => EnvFilter::new("linkrake=debug,info"),
            2 => EnvFilter::new("linkrake=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
