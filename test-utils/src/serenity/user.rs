//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User with the given ID and username.
///
/// The user has no avatar, no global display name and is not a bot, matching a
/// freshly created account that uses the new username system.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Unique username
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::user::create_test_user;
///
/// let user = create_test_user(123456789, "newbie");
/// assert_eq!(user.name, "newbie");
/// assert!(user.avatar.is_none());
/// ```
pub fn create_test_user(user_id: u64, username: &str) -> User {
    serde_json::from_value(test_user_json(user_id, username))
        .expect("Failed to create test user - invalid JSON structure")
}

/// Gateway JSON for a test user, for embedding in other payloads.
pub fn test_user_json(user_id: u64, username: &str) -> serde_json::Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": false,
        "system": false,
        "public_flags": 0,
    })
}
