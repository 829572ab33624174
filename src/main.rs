use anyhow::{Context, Result};
use clap::Parser;
use readscore::cli::Cli;
use readscore::config::{load_config, load_config_from_path, ReadabilityConfig};
use readscore::io::{create_writer, read_headline, HeadlineReport};
use readscore::scoring::ReadabilityEngine;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.default_log_filter());

    let config = resolve_config(&cli)?;
    let engine = ReadabilityEngine::new(config)?;

    let headline = match cli.headline {
        Some(headline) => headline,
        None => read_headline(std::io::stdin().lock())?,
    };
    let readability = engine.score(&headline);
    let report = HeadlineReport::new(headline, readability);

    let mut writer = create_writer(cli.format.into(), Box::new(std::io::stdout().lock()));
    writer.write_report(&report)?;
    Ok(())
}

// Explicit config file first, then discovery; CLI flags override both
fn resolve_config(cli: &Cli) -> Result<ReadabilityConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => load_config(),
    };
    if let Some(limit) = cli.sample_limit {
        config.sample_limit = limit;
    }
    Ok(config)
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // A subscriber may already be installed when embedded in a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
