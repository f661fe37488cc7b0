//! Contact Book - Main entry point
//!
//! Starts an interactive session on stdin/stdout. Logs go to stderr so they
//! never mix with the conversation.

use anyhow::Result;
use contact_book::{Config, Session};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over LOG_LEVEL
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
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

    info!("Birthday window: {} days", config.birthday_window_days);

    let mut session = Session::new(config);
    session.run(io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
