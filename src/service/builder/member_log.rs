//! Join and leave log embeds.

use serenity::all::{
    ChannelId, CreateEmbed, CreateEmbedFooter, Member, Mentionable, Timestamp, User,
};

use crate::config::{brand, colors};
use crate::service::builder::brand_author;

/// Footer text showing the guild size.
pub fn member_count_footer(member_count: Option<u64>) -> String {
    match member_count {
        Some(count) => format!("{count} Members"),
        None => "? Members".to_string(),
    }
}

fn member_log_embed(
    title: String,
    description: String,
    color: u32,
    avatar_url: String,
    member_count: Option<u64>,
    timestamp: Timestamp,
) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(color)
        .author(brand_author())
        .thumbnail(avatar_url)
        .footer(CreateEmbedFooter::new(member_count_footer(member_count)))
        .timestamp(timestamp)
}

/// Welcome embed posted when a member joins.
///
/// # Arguments
/// - `user` - The member who joined
/// - `rules` - Rules channel the newcomer is pointed to
/// - `member_count` - Guild size after the join, if known
/// - `timestamp` - Embed timestamp
pub fn join_embed(
    user: &User,
    rules: ChannelId,
    member_count: Option<u64>,
    timestamp: Timestamp,
) -> CreateEmbed {
    member_log_embed(
        format!("{} Joined!", user.name),
        format!(
            "{}, welcome to **{}**! We hope you have a great time here. \
             Please go through {} in order to proceed.",
            user.mention(),
            brand::SERVER_NAME,
            rules.mention()
        ),
        colors::GREEN,
        user.face(),
        member_count,
        timestamp,
    )
}

/// Name and avatar shown for a departed member.
///
/// The cached member, when available, provides the guild nickname and avatar.
pub fn leave_identity(user: &User, member: Option<&Member>) -> (String, String) {
    match member {
        Some(member) => (member.display_name().to_string(), member.face()),
        None => (user.display_name().to_string(), user.face()),
    }
}

/// Farewell embed posted when a member leaves.
///
/// # Arguments
/// - `display_name` - Nickname or global name of the member who left
/// - `avatar_url` - Their avatar
/// - `member_count` - Guild size after the leave, if known
/// - `timestamp` - Embed timestamp
pub fn leave_embed(
    display_name: &str,
    avatar_url: String,
    member_count: Option<u64>,
    timestamp: Timestamp,
) -> CreateEmbed {
    member_log_embed(
        format!("{display_name} Left"),
        "We hope you enjoyed your time here.".to_string(),
        colors::ORANGE,
        avatar_url,
        member_count,
        timestamp,
    )
}
