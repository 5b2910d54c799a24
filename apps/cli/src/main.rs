//! # dvd-shop
//!
//! Prices a cart of DVD titles, applying the Back to the Future collection
//! discount.
//!
//! ## Usage
//! ```text
//! # Piped: one title per line
//! printf 'Back to the Future 1\nBack to the Future 2\n' | dvd-shop
//!
//! # Interactive prompt when stdin is a terminal
//! dvd-shop --format simple
//!
//! # Custom prices and verbose logs
//! DVD_SPECIAL_PRICE=12.5 RUST_LOG=debug dvd-shop --config shop.toml
//! ```
//!
//! Logs go to stderr so receipts and JSON on stdout stay clean.

mod config;
mod error;
mod render;
mod session;

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, OutputFormat};
use crate::session::Shop;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "dvd-shop", version, about)]
struct Args {
    /// Path to a TOML config file (defaults to ./dvd-shop.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format; overrides the config file
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();

    let mut config =
        AppConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(format) = args.format {
        config.display.format = format;
    }

    info!(
        standard_price = %config.pricing.standard_price,
        special_price = %config.pricing.special_price,
        currency = %config.pricing.currency,
        format = %config.display.format,
        "Configuration loaded"
    );

    let shop = Shop::new(&config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();

    if stdin.is_terminal() {
        shop.run_interactive(stdin.lock(), &mut stdout, &mut stderr)?;
    } else {
        shop.run_piped(stdin.lock(), &mut stdout, &mut stderr)?;
    }

    Ok(())
}

/// Installs the stderr subscriber, honoring `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,dvd_shop=info,dvd_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
