//! Moderator announcements: rules, repeated messages and the registration panel.

use serenity::all::{ChannelId, Context, CreateAttachment, CreateMessage, Message};

use crate::error::AppError;
use crate::service::builder::{announcement, rules};
use crate::state::BotState;

pub struct AnnouncementService<'a> {
    ctx: &'a Context,
    state: &'a BotState,
}

impl<'a> AnnouncementService<'a> {
    pub fn new(ctx: &'a Context, state: &'a BotState) -> Self {
        Self { ctx, state }
    }

    /// Sends the three rules embeds to `channel_id` in a single message.
    ///
    /// Thumbnails for the guidelines and moderation embeds are attached from the
    /// assets directory; a missing file only drops that thumbnail.
    pub async fn publish_rules(&self, channel_id: ChannelId) -> Result<(), AppError> {
        let community = self.load_asset(rules::COMMUNITY_ICON).await;
        let moderator = self.load_asset(rules::MODERATOR_ICON).await;

        let embeds = rules::rules_embeds(
            self.state.config.roles.moderator,
            community
                .as_ref()
                .map(|_| rules::attachment_url(rules::COMMUNITY_ICON)),
            moderator
                .as_ref()
                .map(|_| rules::attachment_url(rules::MODERATOR_ICON)),
        );

        let message = CreateMessage::new()
            .embeds(embeds)
            .files(community.into_iter().chain(moderator));

        channel_id.send_message(&self.ctx.http, message).await?;

        Ok(())
    }

    /// Deletes the invoking message and re-posts `text` without pinging anyone.
    pub async fn repeat(&self, invocation: &Message, text: &str) -> Result<(), AppError> {
        invocation.delete(&self.ctx.http).await?;

        invocation
            .channel_id
            .send_message(&self.ctx.http, announcement::repeat_message(text))
            .await?;

        Ok(())
    }

    /// Posts the registration panel with its buttons.
    ///
    /// # Arguments
    /// - `channel_id` - Where to post
    /// - `closed` - Disables the Register button; also forced by configuration
    pub async fn post_registration_panel(
        &self,
        channel_id: ChannelId,
        closed: bool,
    ) -> Result<(), AppError> {
        let closed = announcement::panel_closed(closed, self.state.registration_open());
        let message = announcement::panel_message(self.state.config.channels.rules, closed);

        channel_id.send_message(&self.ctx.http, message).await?;

        Ok(())
    }

    async fn load_asset(&self, filename: &str) -> Option<CreateAttachment> {
        let path = self.state.config.assets_dir.join(filename);

        match CreateAttachment::path(&path).await {
            Ok(attachment) => Some(attachment),
            Err(e) => {
                tracing::warn!("Failed to load asset {}: {}", path.display(), e);
                None
            }
        }
    }
}
