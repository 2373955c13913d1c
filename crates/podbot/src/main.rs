//! podbot - Main Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use podbot::panic::install_panic_hook;
use podbot::PodBot;
use podbot_common::init_logging;
use podbot_config::ConfigLoader;
use std::path::PathBuf;
use tracing::{error, info};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter, overriding the configured level
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ConfigLoader::load(args.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    // Held for the whole run so buffered file output is flushed on exit.
    let _log_guard = init_logging(&config.logging.to_logging_config())
        .context("Failed to initialise logging")?;
    install_panic_hook();

    info!("Starting podbot with prefix {:?}", config.discord.prefix);

    let bot = PodBot::from_config(config)?;
    if let Err(e) = bot.start().await {
        error!("podbot exited with error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
