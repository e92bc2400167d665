//! Gradplan CLI - degree plan validation and sharing
//!
//! Loads the course/program catalog, restores any saved plan, runs one
//! command against the session, and persists the result when state changed.

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;

use gradplan::{storage, Catalog, Config, Session};

use crate::cli::Cli;

fn main() -> Result<()> {
    let args = Cli::parse();

    let config = Config::load_or_default().context("could not read gradplan.toml")?;
    let catalog = Catalog::load(&config.catalog.courses, &config.catalog.programs)?;

    let mut session = Session::new(catalog);
    let storage_path = config.storage_path();
    match storage::load(&storage_path) {
        Ok(Some(saved)) => session.restore(saved),
        Ok(None) => {}
        Err(e) => eprintln!("warning: {e}; starting from a fresh plan"),
    }

    let changed = commands::run(args.command, &mut session)?;
    if changed {
        storage::save(&storage_path, &session.saved_data())?;
    }
    Ok(())
}
