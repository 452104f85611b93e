//! Address book console - main entry point.
//!
//! Loads the snapshot, runs the interactive command loop over
//! stdin/stdout, and persists the book on the way out.

use anyhow::Result;
use cardfile::storage::{FileSnapshotStore, SnapshotStore};
use cardfile::{repl, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only to avoid polluting the conversation
    // on stdout). RUST_LOG wins; LOG_LEVEL is the fallback.
    let _ = dotenvy::dotenv();
    let default_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Snapshot file: {}", config.book_path.display());

    let store = FileSnapshotStore::new(&config.book_path);
    let mut book = store.load()?;
    info!("Address book loaded with {} contact(s)", book.len());

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(stdin.lock(), &mut stdout.lock(), &mut book, &store)?;

    info!("Session complete");
    Ok(())
}
