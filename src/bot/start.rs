use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::error::AppError;
use crate::state::BotState;

/// Starts the Discord bot in a blocking manner
///
/// Creates the client with the bot's event handler and runs it until the gateway
/// connection shuts down.
///
/// # Arguments
/// - `state` - Shared bot state; the token is read from its configuration
///
/// # Returns
/// - `Ok(())` if the bot starts and runs successfully
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(state: Arc<BotState>) -> Result<(), AppError> {
    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents - must be enabled in the Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let token = state.config.bot_token.clone();
    let handler = Handler::new(state);

    let mut client = Client::builder(&token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Blocks until shutdown
    client.start().await?;

    Ok(())
}
