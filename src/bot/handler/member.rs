use serenity::all::{Context, GuildId, Member, User};

use crate::service::member_log::MemberLogService;
use crate::state::BotState;

/// Handles the guild_member_addition event when a member joins a guild
pub async fn handle_guild_member_addition(state: &BotState, ctx: Context, new_member: Member) {
    let service = MemberLogService::new(&ctx, state);

    if let Err(e) = service.post_join(&new_member).await {
        tracing::error!(
            "Failed to post join message for {} in guild {}: {}",
            new_member.user.id,
            new_member.guild_id,
            e
        );
    } else {
        tracing::info!("{} joined guild {}", new_member.user.name, new_member.guild_id);
    }
}

/// Handles the guild_member_removal event when a member leaves a guild
pub async fn handle_guild_member_removal(
    state: &BotState,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    member_data_if_available: Option<Member>,
) {
    let service = MemberLogService::new(&ctx, state);

    if let Err(e) = service
        .post_leave(guild_id, &user, member_data_if_available.as_ref())
        .await
    {
        tracing::error!(
            "Failed to post leave message for {} in guild {}: {}",
            user.id,
            guild_id,
            e
        );
    } else {
        tracing::info!("{} left guild {}", user.name, guild_id);
    }
}
