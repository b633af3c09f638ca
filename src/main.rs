//! Address Book - Main entry point
//!
//! Runs the interactive address book session on stdin/stdout.

use address_book::{AddressBookManager, Config, Session};
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only so log lines never interleave with prompts)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting address book (duplicates: {})",
        config.duplicate_policy
    );

    let manager = AddressBookManager::from_config(&config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(manager, stdin.lock(), stdout.lock());
    session.run()?;

    info!("Address book shutdown complete");
    Ok(())
}
