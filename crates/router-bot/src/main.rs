//! Router bot - main entry point.

use anyhow::Context;
use chat_router::{CommandRegistry, Dispatcher};
use router_bot::commands::register_builtin;
use router_bot::config::Config;
use router_bot::error::AppResult;
use signal_client::{MessageReceiver, SignalClient};
use std::sync::Arc;
use tokio::signal;
use tokio_stream::StreamExt;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.bot.log_level);

    info!("Starting router bot...");

    config.router.validate()?;
    let account = config.router.require_token()?;

    let client = SignalClient::new(&config.signal.service_url, account)
        .context("Failed to create Signal client")?;

    if !client.health_check().await {
        error!("Signal API not reachable at {}", config.signal.service_url);
        return Err(anyhow::anyhow!("Signal API not reachable").into());
    }
    info!("Signal API healthy");

    let mut registry = CommandRegistry::new(config.router.access_order());
    register_builtin(&mut registry)?;
    info!("Registered {} commands", registry.len());

    let dispatcher =
        Dispatcher::connect(config.router.clone(), registry, Arc::new(client.clone())).await?;

    info!(
        "Listening for messages (prefix={:?}, safemode={})...",
        config.router.prefix, config.router.safemode
    );

    let receiver = MessageReceiver::new(client, config.signal.poll_interval);
    let mut stream = Box::pin(receiver.stream());

    // Main message loop
    loop {
        tokio::select! {
            Some(message) = stream.next() => {
                let dispatcher = dispatcher.clone();
                tokio::spawn(async move {
                    let outcome = dispatcher.dispatch(message.into()).await;
                    debug!("Dispatch outcome: {:?}", outcome);
                });
            }
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("Shutting down...");
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
