//! Registration panel, modal and audit embed.

use serenity::all::{
    ButtonStyle, ChannelId, CreateActionRow, CreateButton, CreateEmbed, CreateInputText,
    CreateModal, InputTextStyle, Mentionable, Timestamp, User,
};

use crate::config::colors;
use crate::model::registration::{
    RegistrationSubmission, GUEST_BUTTON_ID, REGISTER_BUTTON_ID, REGISTRATION_FIELDS,
    REGISTRATION_MODAL_ID,
};
use crate::service::builder::brand_author;

pub const ALREADY_REGISTERED: &str =
    "You are already registered. Use `/departments` at any time to choose your departments!";
pub const REGISTERED: &str =
    "You have been registered. Use `/departments` at any time to choose your departments!";
pub const REGISTRATION_CLOSED: &str =
    "Registrations are currently closed. You can proceed to join as a guest.";
pub const GUEST_ADDED: &str = "You have been registered as a guest!";
pub const GUEST_REMOVED: &str = "Your guest role has been removed.";

/// Announcement embed above the panel buttons.
pub fn panel_embed(rules: ChannelId, closed: bool) -> CreateEmbed {
    let intro = if closed {
        REGISTRATION_CLOSED
    } else {
        "Register to join the club, or proceed to the server as a guest!"
    };

    CreateEmbed::new()
        .title("Member Registration")
        .description(format!(
            "{intro} **By proceeding, you agree to {}.**",
            rules.mention()
        ))
        .color(colors::ORANGE)
        .author(brand_author())
}

/// "Register" and "Join as Guest" buttons; Register is disabled when closed.
pub fn panel_buttons(closed: bool) -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(REGISTER_BUTTON_ID)
            .label("Register")
            .style(ButtonStyle::Success)
            .disabled(closed),
        CreateButton::new(GUEST_BUTTON_ID)
            .label("Join as Guest")
            .style(ButtonStyle::Secondary),
    ])
}

/// Modal collecting the registration details.
pub fn registration_modal() -> CreateModal {
    let rows = REGISTRATION_FIELDS
        .iter()
        .map(|field| {
            CreateActionRow::InputText(
                CreateInputText::new(InputTextStyle::Short, field.label, field.custom_id)
                    .placeholder(field.placeholder)
                    .max_length(field.max_length)
                    .required(true),
            )
        })
        .collect();

    CreateModal::new(REGISTRATION_MODAL_ID, "Member Registration").components(rows)
}

/// Audit embed for the member-info channel, one field per submitted value.
pub fn registration_audit_embed(
    user: &User,
    submission: &RegistrationSubmission,
    timestamp: Timestamp,
) -> CreateEmbed {
    let fields = submission.entries.iter().map(|(name, value)| {
        let value = if value.is_empty() { "-" } else { value.as_str() };
        (name.as_str(), value, false)
    });

    CreateEmbed::new()
        .title(format!("Member Registration ({})", user.id))
        .color(colors::GREEN)
        .thumbnail(user.face())
        .fields(fields)
        .timestamp(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::builder::now_timestamp;
    use test_utils::serenity::create_test_user;

    #[test]
    fn panel_embed_reflects_registration_state() {
        let open = serde_json::to_value(panel_embed(ChannelId::new(3), false)).unwrap();
        let closed = serde_json::to_value(panel_embed(ChannelId::new(3), true)).unwrap();

        let open_text = open["description"].as_str().unwrap();
        assert!(open_text.starts_with("Register to join the club"));
        assert!(open_text.ends_with("**By proceeding, you agree to <#3>.**"));
        assert!(closed["description"]
            .as_str()
            .unwrap()
            .starts_with("Registrations are currently closed."));
        assert_eq!(open["color"], colors::ORANGE);
    }

    /// A complete registration: the audit embed carries all four submitted values
    /// under their field names.
    #[test]
    fn audit_embed_lists_every_submitted_value() {
        let user = create_test_user(9001, "a");
        let submission = RegistrationSubmission::from_inputs(vec![
            ("full_name".to_string(), Some("A".to_string())),
            ("registration_number".to_string(), Some("123".to_string())),
            ("email".to_string(), Some("a@b.edu".to_string())),
            ("phone".to_string(), Some("1234567890".to_string())),
        ]);

        let json = serde_json::to_value(registration_audit_embed(
            &user,
            &submission,
            now_timestamp().unwrap(),
        ))
        .unwrap();

        assert_eq!(json["title"], "Member Registration (9001)");
        let fields = json["fields"].as_array().unwrap();
        let pairs: Vec<(&str, &str)> = fields
            .iter()
            .map(|f| (f["name"].as_str().unwrap(), f["value"].as_str().unwrap()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Full Name", "A"),
                ("Registration Number", "123"),
                ("Learner's Email Address", "a@b.edu"),
                ("Phone Number", "1234567890"),
            ]
        );
        assert!(fields.iter().all(|f| f["inline"] == false));
    }

    #[test]
    fn audit_embed_substitutes_empty_values() {
        let user = create_test_user(1, "a");
        let submission =
            RegistrationSubmission::from_inputs(vec![("phone".to_string(), None)]);
        let json = serde_json::to_value(registration_audit_embed(
            &user,
            &submission,
            now_timestamp().unwrap(),
        ))
        .unwrap();

        assert_eq!(json["fields"][0]["value"], "-");
    }
}
