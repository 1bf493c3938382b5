//! Prefix command dispatch.
//!
//! Every prefix command is moderator-only. Gate rejections are not answered in
//! chat; they are logged at debug level and the message is left alone.

use serenity::all::{Context, GuildId, Message, RoleId};

use crate::error::AppError;
use crate::model::command::PrefixCommand;
use crate::service::announcement::AnnouncementService;
use crate::service::guard;
use crate::state::BotState;

/// Handle message creation in a channel
pub async fn handle_message(state: &BotState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }
    // Only guild channels carry commands
    let Some(guild_id) = message.guild_id else {
        return;
    };
    let Some(parsed) = PrefixCommand::parse(&state.config.prefix, &message.content) else {
        return;
    };

    let result = match parsed {
        Ok(command) => run_command(state, &ctx, guild_id, &message, command).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => {}
        Err(AppError::CommandErr(e)) => {
            tracing::debug!(
                "Rejected command from {} in channel {}: {}",
                message.author.id,
                message.channel_id,
                e
            );
        }
        Err(e) => {
            tracing::error!(
                "Command failed for message {} in channel {}: {}",
                message.id,
                message.channel_id,
                e
            );
        }
    }
}

async fn run_command(
    state: &BotState,
    ctx: &Context,
    guild_id: GuildId,
    message: &Message,
    command: PrefixCommand,
) -> Result<(), AppError> {
    let roles = author_roles(ctx, guild_id, message).await?;

    guard::check_command(
        &state.cooldowns,
        command.name(),
        message.author.id,
        &roles,
        state.config.roles.moderator,
    )
    .await?;

    tracing::info!(
        "{} invoked {} in channel {}",
        message.author.name,
        command.name(),
        message.channel_id
    );

    let service = AnnouncementService::new(ctx, state);
    match command {
        PrefixCommand::Rules => service.publish_rules(message.channel_id).await,
        PrefixCommand::Repeat { text } => service.repeat(message, &text).await,
        PrefixCommand::Roles { closed } => {
            service
                .post_registration_panel(message.channel_id, closed)
                .await
        }
    }
}

/// Roles of the message author, from the message payload or the API.
async fn author_roles(
    ctx: &Context,
    guild_id: GuildId,
    message: &Message,
) -> Result<Vec<RoleId>, AppError> {
    if let Some(member) = &message.member {
        return Ok(member.roles.clone());
    }

    let member = ctx.http.get_member(guild_id, message.author.id).await?;

    Ok(member.roles)
}
