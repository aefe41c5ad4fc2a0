//! Replay configuration

use std::path::PathBuf;

use clap::Parser;
use rusty_money::iso::{self, Currency};

/// Replay an action script against a product catalog and print the resulting cart
#[derive(Debug, Parser)]
#[command(name = "trolley", about = "Shopping cart action replay", long_about = None)]
pub struct ReplayConfig {
    /// Directory containing `products/` and `actions/` fixture sets
    #[arg(short, long, env = "TROLLEY_FIXTURES", default_value = "./fixtures")]
    pub fixtures: PathBuf,

    /// Product catalog fixture name
    #[arg(short, long, env = "TROLLEY_CATALOG", default_value = "demo")]
    pub catalog: String,

    /// Action script fixture name
    #[arg(short, long, env = "TROLLEY_ACTIONS", default_value = "demo")]
    pub actions: String,

    /// Cart currency (GBP, USD or EUR); defaults to the catalog currency
    #[arg(long, env = "TROLLEY_CURRENCY", value_parser = parse_currency)]
    pub currency: Option<&'static Currency>,

    /// Log level (trace, debug, info, warn, error); a `RUST_LOG` filter in the environment takes precedence
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl ReplayConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

fn parse_currency(code: &str) -> Result<&'static Currency, String> {
    match code.trim().to_ascii_uppercase().as_str() {
        "GBP" => Ok(iso::GBP),
        "USD" => Ok(iso::USD),
        "EUR" => Ok(iso::EUR),
        other => Err(format!("unsupported currency: {other}")),
    }
}
