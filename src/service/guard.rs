//! Command gates run before a command body.
//!
//! The role check runs first so that members lacking the role never consume a
//! cooldown use.

use serenity::all::{RoleId, UserId};

use crate::error::command::CommandError;
use crate::model::command::CommandName;
use crate::service::cooldown::CooldownService;

/// Fails unless `roles` contains `required`.
pub fn require_role(roles: &[RoleId], required: RoleId) -> Result<(), CommandError> {
    if roles.contains(&required) {
        Ok(())
    } else {
        Err(CommandError::MissingRole { role: required })
    }
}

/// Role check followed by a cooldown hit.
pub async fn check_command(
    cooldowns: &CooldownService,
    command: CommandName,
    user: UserId,
    roles: &[RoleId],
    required: RoleId,
) -> Result<(), CommandError> {
    require_role(roles, required)?;
    cooldowns.hit(command, user).await
}
