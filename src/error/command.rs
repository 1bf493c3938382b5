use std::time::Duration;

use serenity::all::RoleId;
use thiserror::Error;

use crate::model::command::CommandName;

/// Rejections produced by command gates before a command body runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The bucket for this command has no uses left in the current window.
    #[error("Command `{command}` is on cooldown, retry in {}s", retry_after.as_secs())]
    OnCooldown {
        /// Command that was invoked
        command: CommandName,
        /// Time until the next use is accepted
        retry_after: Duration,
    },

    /// The invoking member does not hold the role the command requires.
    #[error("Command requires role {role}")]
    MissingRole {
        /// The required role
        role: RoleId,
    },

    /// A required argument was not supplied.
    #[error("Missing required argument `{name}`")]
    MissingArgument {
        /// Argument name as shown in usage
        name: &'static str,
    },

    /// The command or component was used outside of a guild.
    #[error("This can only be used inside a server")]
    NotInGuild,
}
