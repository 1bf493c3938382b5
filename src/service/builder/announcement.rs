//! Messages posted by moderator announcement commands.

use serenity::all::{ChannelId, CreateAllowedMentions, CreateMessage};

use crate::service::builder::registration;

/// Re-posted moderator text; no user, role or everyone mention pings.
pub fn repeat_message(text: &str) -> CreateMessage {
    CreateMessage::new()
        .content(text)
        .allowed_mentions(CreateAllowedMentions::new())
}

/// Whether the panel's Register button is disabled.
///
/// Closed registrations in configuration override an open request.
pub fn panel_closed(requested_closed: bool, registration_open: bool) -> bool {
    requested_closed || !registration_open
}

/// Registration panel embed with its buttons.
pub fn panel_message(rules: ChannelId, closed: bool) -> CreateMessage {
    CreateMessage::new()
        .embed(registration::panel_embed(rules, closed))
        .components(vec![registration::panel_buttons(closed)])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that repeated text can't ping anyone.
    ///
    /// Expected: text unchanged and every allowed-mention list empty
    #[test]
    fn repeat_suppresses_every_mention() {
        let json =
            serde_json::to_value(repeat_message("hello @everyone <@&55> <@42>")).unwrap();

        assert_eq!(json["content"], "hello @everyone <@&55> <@42>");
        assert_eq!(json["allowed_mentions"]["parse"], serde_json::json!([]));
        assert_eq!(json["allowed_mentions"]["users"], serde_json::json!([]));
        assert_eq!(json["allowed_mentions"]["roles"], serde_json::json!([]));
    }

    #[test]
    fn configuration_forces_panel_closed() {
        assert!(!panel_closed(false, true));
        assert!(panel_closed(true, true));
        assert!(panel_closed(false, false));
        assert!(panel_closed(true, false));
    }

    /// Expected: Register disabled exactly when closed, Join as Guest always enabled
    #[test]
    fn panel_message_disables_register_when_closed() {
        for closed in [false, true] {
            let json = serde_json::to_value(panel_message(ChannelId::new(3), closed)).unwrap();
            let buttons = &json["components"][0]["components"];

            assert_eq!(json["embeds"].as_array().unwrap().len(), 1);
            assert_eq!(buttons[0]["label"], "Register");
            assert_eq!(buttons[0]["disabled"], closed);
            assert_eq!(buttons[1]["disabled"], false);
        }
    }
}
