//! Kosh-Harvester main entry point
//!
//! This is the command-line interface for the Kosh-Harvester archive crawler.

use clap::Parser;
use kosh_harvester::config::{load_config_with_hash, validate, Config};
use kosh_harvester::crawler::Coordinator;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Kosh-Harvester: a polite literary archive harvester
///
/// Kosh-Harvester walks the author index of a poetry archive, collects each
/// author's works (splitting multi-part works into their parts), and writes
/// one JSON file per author.
#[derive(Parser, Debug)]
#[command(name = "kosh-harvester")]
#[command(version)]
#[command(about = "A polite literary archive harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Directory that receives one JSON file per author
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Maximum number of authors to harvest
    #[arg(short = 'n', long, value_name = "N")]
    max_authors: Option<usize>,

    /// Lower bound of the pause between requests, in milliseconds
    #[arg(long, value_name = "MS")]
    delay_min_ms: Option<u64>,

    /// Upper bound of the pause between requests, in milliseconds
    #[arg(long, value_name = "MS")]
    delay_max_ms: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// List the authors that would be harvested and exit
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(dir) = &self.output_dir {
            config.output.output_dir = dir.display().to_string();
        }
        if let Some(max) = self.max_authors {
            config.crawler.max_authors = max;
        }
        if let Some(min) = self.delay_min_ms {
            config.crawler.delay_min_ms = min;
        }
        if let Some(max) = self.delay_max_ms {
            config.crawler.delay_max_ms = max;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    cli.apply_overrides(&mut config);
    if let Err(e) = validate(&config) {
        tracing::error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    if cli.dry_run {
        handle_dry_run(&config).await
    } else {
        handle_harvest(&config).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("kosh_harvester=info,warn"),
            1 => EnvFilter::new("kosh_harvester=debug,info"),
            2 => EnvFilter::new("kosh_harvester=trace,debug"),
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

/// Handles the --dry-run mode: fetches the index and prints the author list
async fn handle_dry_run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Kosh-Harvester Dry Run ===\n");

    println!("Site:");
    println!("  Index: {}", config.site.index_url()?);
    println!("  Content region: {}", config.site.content_selector);
    println!("  Poem containers: {}", config.site.poem_selectors.join(", "));

    println!("\nCrawler:");
    println!("  Max authors: {}", config.crawler.max_authors);
    println!(
        "  Delay: {}-{}ms",
        config.crawler.delay_min_ms, config.crawler.delay_max_ms
    );
    println!("  Output: {}", config.output.output_dir);

    let coordinator = Coordinator::new(config)?;
    let authors = coordinator.discover_authors().await?;

    println!("\nAuthors ({}):", authors.len());
    for author in &authors {
        println!("  - {} ({})", author.name, author.index_url);
    }

    Ok(())
}

/// Handles the main harvest operation
async fn handle_harvest(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        "Harvesting up to {} authors into {}",
        config.crawler.max_authors,
        config.output.output_dir
    );

    let coordinator = Coordinator::new(config)?;
    match coordinator.run().await {
        Ok(report) => {
            tracing::info!(
                "All authors processed: {}/{} saved",
                report.authors_saved,
                report.authors_found
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}
