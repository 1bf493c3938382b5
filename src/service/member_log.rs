//! Member join/leave notifications.

use serenity::all::{Context, CreateMessage, GuildId, Member, User};

use crate::error::AppError;
use crate::service::builder::{member_log, now_timestamp};
use crate::state::BotState;

pub struct MemberLogService<'a> {
    ctx: &'a Context,
    state: &'a BotState,
}

impl<'a> MemberLogService<'a> {
    pub fn new(ctx: &'a Context, state: &'a BotState) -> Self {
        Self { ctx, state }
    }

    /// Posts the welcome embed for a member who just joined.
    pub async fn post_join(&self, member: &Member) -> Result<(), AppError> {
        let member_count = self.member_count(member.guild_id).await;
        let embed = member_log::join_embed(
            &member.user,
            self.state.config.channels.rules,
            member_count,
            now_timestamp()?,
        );

        self.post(CreateMessage::new().embed(embed)).await
    }

    /// Posts the farewell embed for a member who just left.
    pub async fn post_leave(
        &self,
        guild_id: GuildId,
        user: &User,
        member: Option<&Member>,
    ) -> Result<(), AppError> {
        let member_count = self.member_count(guild_id).await;
        let (display_name, avatar_url) = member_log::leave_identity(user, member);

        let embed =
            member_log::leave_embed(&display_name, avatar_url, member_count, now_timestamp()?);

        self.post(CreateMessage::new().embed(embed)).await
    }

    async fn post(&self, message: CreateMessage) -> Result<(), AppError> {
        self.state
            .config
            .channels
            .log
            .send_message(&self.ctx.http, message)
            .await?;

        Ok(())
    }

    /// Guild size from the gateway cache, falling back to the REST approximation.
    async fn member_count(&self, guild_id: GuildId) -> Option<u64> {
        if let Some(count) = guild_id
            .to_guild_cached(&self.ctx.cache)
            .map(|guild| guild.member_count)
        {
            return Some(count);
        }

        match self.ctx.http.get_guild_with_counts(guild_id).await {
            Ok(guild) => guild.approximate_member_count,
            Err(e) => {
                tracing::warn!("Failed to fetch member count for guild {}: {}", guild_id, e);
                None
            }
        }
    }
}
