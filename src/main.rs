//! Personal Assistant - Main entry point
//!
//! Runs the interactive prompt loop on stdin/stdout. Logs go to stderr.

use anyhow::{Context, Result};
use personal_assistant::{Assistant, Config, ConsoleUserInterface};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        data_dir = %config.data_dir.display(),
        duplicate_policy = ?config.duplicate_policy,
        note_sort_key = %config.note_sort_key,
        "Configuration loaded"
    );

    let mut assistant = Assistant::new(config, ConsoleUserInterface::stdio());
    assistant.restore_autosaves();
    assistant.run().context("Interactive session failed")?;

    info!("Personal assistant shutdown complete");
    Ok(())
}
