//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

use crate::serenity::user::test_user_json;

/// Creates a test Serenity guild Member wrapping a test user.
///
/// The member holds no roles and has no guild avatar, so `face()` falls back to
/// the user's avatar.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the member belongs to
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Unique username
/// - `nick` - Guild nickname, if any
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(
    guild_id: u64,
    user_id: u64,
    username: &str,
    nick: Option<&str>,
) -> Member {
    serde_json::from_value(serde_json::json!({
        "user": test_user_json(user_id, username),
        "nick": nick,
        "avatar": null,
        "roles": [],
        "joined_at": "2024-01-01T00:00:00.000Z",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": null,
        "communication_disabled_until": null,
        "guild_id": guild_id.to_string(),
        "unusual_dm_activity_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
