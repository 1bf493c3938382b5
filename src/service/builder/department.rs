//! Department selection prompt, select menu, audit embed and command error replies.

use std::time::Duration;

use serenity::all::{
    CreateActionRow, CreateCommand, CreateEmbed, CreateEmbedAuthor, CreateSelectMenu,
    CreateSelectMenuKind, CreateSelectMenuOption, ReactionType, Timestamp, User,
};

use crate::config::colors;
use crate::error::command::CommandError;
use crate::model::command::DEPARTMENTS_COMMAND;
use crate::model::department::{Department, DepartmentCatalog};
use crate::model::registration::DEPARTMENT_SELECT_ID;
use crate::service::builder::role_mentions;

/// Slash command definition for `/departments`.
pub fn departments_command() -> CreateCommand {
    CreateCommand::new(DEPARTMENTS_COMMAND)
        .description("Choose your departments within the club! Your current roles will be reset.")
}

/// Embed shown with the department select menu.
pub fn selection_prompt_embed(max_selectable: usize, timestamp: Timestamp) -> CreateEmbed {
    CreateEmbed::new()
        .title("Department Selection")
        .description(format!(
            "Your current departments have been removed. \
             Please select (upto {max_selectable}) departments from the following list."
        ))
        .color(colors::BLUE)
        .timestamp(timestamp)
}

/// One select option per department, valued by role ID.
pub fn department_options(catalog: &DepartmentCatalog) -> Vec<CreateSelectMenuOption> {
    catalog
        .iter()
        .map(|department| {
            CreateSelectMenuOption::new(&department.label, department.role_id.to_string())
                .emoji(ReactionType::Unicode(department.emoji.clone()))
        })
        .collect()
}

/// String select over the whole catalog, 1 to `max_selectable` choices.
pub fn department_select(catalog: &DepartmentCatalog) -> CreateActionRow {
    let max_values = u8::try_from(catalog.max_selectable()).unwrap_or(u8::MAX);

    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(
            DEPARTMENT_SELECT_ID,
            CreateSelectMenuKind::String {
                options: department_options(catalog),
            },
        )
        .min_values(1)
        .max_values(max_values),
    )
}

/// Ephemeral confirmation listing the newly held departments.
pub fn enrolled_message(selected: &[&Department]) -> String {
    format!(
        "Your enrolled departments are: {}",
        role_mentions(selected.iter().map(|d| d.role_id))
    )
}

/// Before/after audit embed for the member-info channel.
pub fn department_audit_embed(
    user: &User,
    previous: &[&Department],
    selected: &[&Department],
    timestamp: Timestamp,
) -> CreateEmbed {
    CreateEmbed::new()
        .title("Member Departments Changed")
        .color(colors::YELLOW)
        .timestamp(timestamp)
        .author(CreateEmbedAuthor::new(user.tag()).icon_url(user.face()))
        .field(
            "Old Departments",
            role_mentions(previous.iter().map(|d| d.role_id)),
            false,
        )
        .field(
            "New Departments",
            role_mentions(selected.iter().map(|d| d.role_id)),
            true,
        )
}

/// Friendly reply for `/departments` gate failures.
///
/// # Returns
/// - `Some(CreateEmbed)` - Cooldown or missing member role
/// - `None` - Any other error, which the caller propagates
pub fn command_error_embed(error: &CommandError, timestamp: Timestamp) -> Option<CreateEmbed> {
    let (title, description) = match error {
        CommandError::OnCooldown { retry_after, .. } => (
            "Command On Cooldown",
            format!(
                "You can change departments every 12 hours. \
                 Please refrain from using the command too frequently. \
                 You can try again {}.",
                relative_time(timestamp, *retry_after)
            ),
        ),
        CommandError::MissingRole { .. } => (
            "Missing Permissions",
            "This command is only open to registered CodeX members.".to_string(),
        ),
        _ => return None,
    };

    Some(
        CreateEmbed::new()
            .title(title)
            .description(description)
            .color(colors::ORANGE)
            .timestamp(timestamp),
    )
}

/// Discord relative timestamp markup for `now + after`.
fn relative_time(now: Timestamp, after: Duration) -> String {
    let seconds = i64::try_from(after.as_secs()).unwrap_or(i64::MAX);
    format!("<t:{}:R>", now.unix_timestamp().saturating_add(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::command::CommandName;
    use serenity::all::RoleId;
    use test_utils::serenity::create_test_user;

    fn department(code: &str, id: u64) -> Department {
        Department {
            code: code.to_string(),
            role_id: RoleId::new(id),
            label: code.to_uppercase(),
            emoji: "\u{1F4BB}".to_string(),
        }
    }

    fn at(unix: i64) -> Timestamp {
        Timestamp::from_unix_timestamp(unix).unwrap()
    }

    #[test]
    fn options_follow_catalog() {
        let catalog = DepartmentCatalog::new(vec![department("cxsd", 1), department("cxgd", 2)]);
        assert_eq!(department_options(&catalog).len(), 2);
    }

    #[test]
    fn audit_embed_shows_old_and_new() {
        let user = create_test_user(3, "student");
        let old = department("cxsd", 11);
        let new_a = department("cxgd", 12);
        let new_b = department("cxds", 13);

        let json = serde_json::to_value(department_audit_embed(
            &user,
            &[&old],
            &[&new_a, &new_b],
            at(1_700_000_000),
        ))
        .unwrap();

        assert_eq!(json["title"], "Member Departments Changed");
        assert_eq!(json["color"], colors::YELLOW);
        assert_eq!(json["fields"][0]["name"], "Old Departments");
        assert_eq!(json["fields"][0]["value"], "<@&11>");
        assert_eq!(json["fields"][1]["name"], "New Departments");
        assert_eq!(json["fields"][1]["value"], "<@&12> <@&13>");
    }

    #[test]
    fn audit_embed_handles_first_selection() {
        let user = create_test_user(3, "student");
        let new = department("cxgd", 12);
        let json =
            serde_json::to_value(department_audit_embed(&user, &[], &[&new], at(1_700_000_000)))
                .unwrap();

        assert_eq!(json["fields"][0]["value"], "None");
    }

    #[test]
    fn enrolled_message_mentions_roles() {
        let a = department("cxsd", 11);
        assert_eq!(enrolled_message(&[&a]), "Your enrolled departments are: <@&11>");
    }

    #[test]
    fn cooldown_reply_includes_retry_time() {
        let error = CommandError::OnCooldown {
            command: CommandName::Departments,
            retry_after: Duration::from_secs(600),
        };
        let json = serde_json::to_value(command_error_embed(&error, at(1_000)).unwrap()).unwrap();

        assert_eq!(json["title"], "Command On Cooldown");
        assert!(json["description"].as_str().unwrap().contains("<t:1600:R>"));
    }

    #[test]
    fn missing_role_reply() {
        let error = CommandError::MissingRole {
            role: RoleId::new(1),
        };
        let json = serde_json::to_value(command_error_embed(&error, at(1_000)).unwrap()).unwrap();
        assert_eq!(json["title"], "Missing Permissions");
    }

    #[test]
    fn other_errors_have_no_reply() {
        assert!(command_error_embed(&CommandError::NotInGuild, at(1_000)).is_none());
    }
}
