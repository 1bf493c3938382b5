//! Message, embed and component builders.
//!
//! Builders are pure functions: they take plain data and return serenity builder
//! types, leaving every API call to the services. This keeps message formatting
//! consistent across components and testable without a gateway connection.

pub mod announcement;
pub mod department;
pub mod member_log;
pub mod registration;
pub mod rules;

use serenity::all::{CreateEmbedAuthor, Mentionable, RoleId, Timestamp};

use crate::config::brand;
use crate::error::{internal::InternalError, AppError};

/// Current time as a Discord embed timestamp.
///
/// # Returns
/// - `Ok(Timestamp)` - Now
/// - `Err(AppError::InternalErr)` - Clock outside Discord's timestamp range
pub fn now_timestamp() -> Result<Timestamp, AppError> {
    let now = chrono::Utc::now();
    let timestamp = Timestamp::from_unix_timestamp(now.timestamp()).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp: now.timestamp(),
            reason: e.to_string(),
        }
    })?;

    Ok(timestamp)
}

/// "Team CodeX" author line shown on club announcements.
pub fn brand_author() -> CreateEmbedAuthor {
    CreateEmbedAuthor::new(brand::NAME).icon_url(brand::ICON_URL)
}

/// Space-separated role mentions, or `"None"` when empty.
///
/// Embed field values can't be empty.
pub fn role_mentions<I>(roles: I) -> String
where
    I: IntoIterator<Item = RoleId>,
{
    let mentions: Vec<String> = roles
        .into_iter()
        .map(|role| role.mention().to_string())
        .collect();

    if mentions.is_empty() {
        "None".to_string()
    } else {
        mentions.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_mentions_formats_roles() {
        assert_eq!(
            role_mentions([RoleId::new(1), RoleId::new(22)]),
            "<@&1> <@&22>"
        );
        assert_eq!(role_mentions(Vec::new()), "None");
    }

    #[test]
    fn now_timestamp_is_current() {
        let timestamp = now_timestamp().unwrap();
        let drift = (chrono::Utc::now().timestamp() - timestamp.unix_timestamp()).abs();
        assert!(drift <= 1);
    }
}
