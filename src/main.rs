//! Trolley replay binary
//!
//! Loads a product catalog and an action script from the fixtures directory, dispatches
//! every action through a cart store and prints the resulting cart.
//!
//! Stdout carries only the receipt; logs are written to stderr.

use std::io;

use anyhow::{Context, Result, bail};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use trolley::{
    config::ReplayConfig, fixtures::Fixture, observer::TracingObserver, receipt::Receipt,
    store::CartStore,
};

fn main() -> Result<()> {
    let config = ReplayConfig::load().unwrap_or_else(|err| err.exit());

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let fixture = Fixture::with_base_path(&config.fixtures);

    let catalog = fixture
        .load_catalog(&config.catalog)
        .with_context(|| format!("loading catalog fixture `{}`", config.catalog))?;

    let actions = fixture
        .load_actions(&config.actions)
        .with_context(|| format!("loading action fixture `{}`", config.actions))?;

    let Some(currency) = config.currency.or(catalog.currency()) else {
        bail!(
            "catalog `{}` is empty and no currency was given",
            config.catalog
        );
    };

    info!(
        products = catalog.len(),
        actions = actions.len(),
        currency = currency.iso_alpha_code,
        "replaying actions"
    );

    let mut store = CartStore::new(catalog, currency);
    store.subscribe(TracingObserver);

    let outcome = store.replay(actions);

    if let Err(err) = &outcome {
        error!(applied = err.applied, error = %err.source, "replay stopped");
    }

    Receipt::from_cart(store.state())?.write_to(io::stdout().lock())?;

    let applied = outcome?;

    info!(applied, "replay complete");

    Ok(())
}
