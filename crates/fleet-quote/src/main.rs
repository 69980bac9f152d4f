//! fleet-quote binary
//!
//! Prices a Fleet Builder quote request read from a file or stdin.

use std::fs::File;
use std::io::{self, BufReader, Read};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fleet_common::VERSION;
use fleet_quote::config::{CliArgs, QuoteCliConfig};

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Load configuration
    let mut config = QuoteCliConfig::load()?;
    config.apply_args(&args);

    // Initialize tracing; stdout is reserved for the quote
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting fleet-quote v{}", VERSION);
    info!("Loaded configuration: {:?}", config);

    if args.catalog {
        fleet_quote::write_catalog(io::stdout().lock(), &config)
            .context("Failed to write catalogue")?;
        return Ok(());
    }

    let input: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let quote = fleet_quote::run(input, io::stdout().lock(), &config)
        .context("Failed to price quote request")?;

    info!(
        days = quote.total_days,
        lines = quote.lines.len(),
        total = %quote.total,
        "Quote written"
    );
    Ok(())
}
