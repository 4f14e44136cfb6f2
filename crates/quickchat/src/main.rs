//! QuickChat - Main entry point.

use account_registry::Accounts;
use anyhow::Context;
use message_store::MessageStore;
use quickchat::config::LogConfig;
use quickchat::{App, AppResult, Config, StdioConsole};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.log);

    info!("Starting QuickChat...");

    let accounts = Arc::new(Accounts::load(config.storage.users_store()).await?);
    info!("Account registry ready ({} users)", accounts.count().await);

    let messages = MessageStore::new(config.storage.stored_messages_store());
    if let Err(e) = messages.load_stored().await {
        error!("Failed to load stored messages: {}", e);
    }

    let app = App::new(accounts, messages);
    let mut console = StdioConsole::new();

    tokio::select! {
        result = app.run(&mut console) => result?,
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("Shutting down...");
    Ok(())
}

fn init_logging(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&log.level));

    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so prompts on stdout stay readable
    if log.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
