//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway. The ready handler is used to:
//! - Log connection information
//! - Register the `/departments` slash command
//! - Verify once that the configured channels and roles exist

use serenity::all::{ActivityData, ChannelId, Command, Context, GuildId, Ready, RoleId};

use crate::service::builder::department::departments_command;
use crate::state::BotState;

/// Handles the ready event when the bot connects to Discord.
///
/// This event fires once per bot connection after successful authentication and
/// initial gateway handshake. Failures during command registration or
/// configuration checks are logged and don't stop the bot.
///
/// # Arguments
/// - `state` - Shared bot state holding the configuration to verify
/// - `ctx` - Discord context for API calls and setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("over CodeX")));

    register_commands(state, &ctx).await;
    verify_configuration(state, &ctx).await;
}

/// Registers slash commands in the test guilds, or globally when none are set.
async fn register_commands(state: &BotState, ctx: &Context) {
    let test_guilds = &state.config.test_guilds;

    if test_guilds.is_empty() {
        match Command::set_global_commands(&ctx.http, vec![departments_command()]).await {
            Ok(commands) => tracing::info!("Registered {} global commands", commands.len()),
            Err(e) => tracing::error!("Failed to register global commands: {}", e),
        }
        return;
    }

    for guild_id in test_guilds {
        match guild_id
            .set_commands(&ctx.http, vec![departments_command()])
            .await
        {
            Ok(commands) => {
                tracing::info!("Registered {} commands in guild {}", commands.len(), guild_id)
            }
            Err(e) => tracing::error!("Failed to register commands in guild {}: {}", guild_id, e),
        }
    }
}

/// Checks that every configured channel and role exists.
///
/// The guild is taken from the first channel that resolves; roles are checked
/// against that guild.
async fn verify_configuration(state: &BotState, ctx: &Context) {
    let channels = &state.config.channels;
    let configured_channels: [(&str, ChannelId); 3] = [
        ("log", channels.log),
        ("rules", channels.rules),
        ("member info", channels.member_info),
    ];

    let mut guild_id: Option<GuildId> = None;
    for (name, channel_id) in configured_channels {
        match ctx.http.get_channel(channel_id).await {
            Ok(channel) => {
                if let Some(channel) = channel.guild() {
                    guild_id.get_or_insert(channel.guild_id);
                }
            }
            Err(e) => {
                tracing::error!(
                    "Failed to get {} channel with ID ({}): {}",
                    name,
                    channel_id,
                    e
                );
            }
        }
    }

    let Some(guild_id) = guild_id else {
        tracing::error!("None of the configured channels resolved; skipping role checks");
        return;
    };

    let roles = &state.config.roles;
    let mut configured_roles: Vec<(String, RoleId)> = vec![
        ("moderator".to_string(), roles.moderator),
        ("guest".to_string(), roles.guest),
        ("member".to_string(), roles.member),
    ];
    configured_roles.extend(
        state
            .config
            .departments
            .iter()
            .map(|d| (format!("department {}", d.code), d.role_id)),
    );

    match guild_id.roles(&ctx.http).await {
        Ok(guild_roles) => {
            for (name, role_id) in configured_roles {
                if !guild_roles.contains_key(&role_id) {
                    tracing::error!(
                        "Configured {} role ({}) not found in guild {}",
                        name,
                        role_id,
                        guild_id
                    );
                }
            }
        }
        Err(e) => tracing::error!("Failed to fetch roles for guild {}: {}", guild_id, e),
    }
}
