//! Discord client initialization and runtime setup.
//!
//! Builds the stats client and lookup service, connects to the gateway and
//! runs until the connection ends or a shutdown signal arrives.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use serenity::Client;
use serenity::model::gateway::GatewayIntents;

use crate::application::services::LookupService;
use crate::bot::handler::Handler;
use crate::config::Config;
use crate::infrastructure::http::GuildStatsClient;

/// Runs the bot with the given configuration.
///
/// Initializes:
/// - guildstats.eu HTTP client
/// - Lookup service
/// - Discord gateway client with message content intent
/// - Ctrl+C handler that shuts down all shards
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - The Discord client cannot be created (e.g. malformed token)
/// - The gateway connection fails
pub async fn run(config: Config) -> Result<()> {
    let stats_client =
        GuildStatsClient::from_config(&config).context("Failed to build HTTP client")?;
    tracing::info!("Stats client ready for {}", stats_client.base_url());

    let service = Arc::new(LookupService::new(Arc::new(stats_client)));
    let handler = Handler::new(service, config.command_prefix.clone());

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .context("Failed to create Discord client")?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            shard_manager.shutdown_all().await;
        }
    });

    tracing::info!("Starting Discord client");
    client.start().await.context("Discord client stopped")?;

    Ok(())
}
