//! Command names, their cooldown rules, and prefix command parsing.

use std::fmt;
use std::time::Duration;

use crate::error::command::CommandError;

/// Name of the slash command used to pick departments.
pub const DEPARTMENTS_COMMAND: &str = "departments";

/// Every command the bot answers to, prefix or slash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    Rules,
    Repeat,
    Roles,
    Departments,
}

/// Who shares a cooldown bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketScope {
    /// One bucket for the whole bot.
    Global,
    /// One bucket per invoking user.
    User,
}

/// Allows `uses` invocations per `per` window within a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cooldown {
    pub uses: usize,
    pub per: Duration,
    pub scope: BucketScope,
}

impl CommandName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rules => "rules",
            Self::Repeat => "repeat",
            Self::Roles => "roles",
            Self::Departments => DEPARTMENTS_COMMAND,
        }
    }

    /// Rate limit applied to this command.
    pub fn cooldown(&self) -> Cooldown {
        match self {
            Self::Rules | Self::Roles => Cooldown {
                uses: 3,
                per: Duration::from_secs(30),
                scope: BucketScope::Global,
            },
            Self::Repeat => Cooldown {
                uses: 3,
                per: Duration::from_secs(15),
                scope: BucketScope::Global,
            },
            Self::Departments => Cooldown {
                uses: 1,
                per: Duration::from_secs(43_200),
                scope: BucketScope::User,
            },
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed text command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixCommand {
    /// Publish the rule embeds.
    Rules,
    /// Re-post `text` as the bot.
    Repeat { text: String },
    /// Post the registration panel; `closed` disables the Register button.
    Roles { closed: bool },
}

impl PrefixCommand {
    /// Parses message content into a command.
    ///
    /// # Returns
    /// - `None` - Content doesn't start with the prefix or names no known command
    /// - `Some(Err(CommandError::MissingArgument))` - Known command with bad usage
    /// - `Some(Ok(command))` - Parsed command
    pub fn parse(prefix: &str, content: &str) -> Option<Result<Self, CommandError>> {
        let rest = content.strip_prefix(prefix)?;
        let (name, args) = match rest.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (rest, ""),
        };

        let command = match name {
            "rules" => Ok(Self::Rules),
            "repeat" if args.is_empty() => Err(CommandError::MissingArgument { name: "message" }),
            "repeat" => Ok(Self::Repeat {
                text: args.to_string(),
            }),
            "roles" => Ok(Self::Roles {
                closed: !args.is_empty(),
            }),
            _ => return None,
        };

        Some(command)
    }

    pub fn name(&self) -> CommandName {
        match self {
            Self::Rules => CommandName::Rules,
            Self::Repeat { .. } => CommandName::Repeat,
            Self::Roles { .. } => CommandName::Roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_commands() {
        assert_eq!(PrefixCommand::parse(">", ">rules"), Some(Ok(PrefixCommand::Rules)));
        assert_eq!(
            PrefixCommand::parse(">", ">roles"),
            Some(Ok(PrefixCommand::Roles { closed: false }))
        );
    }

    /// Repeat keeps everything after the command name, including inner whitespace
    /// and mentions.
    #[test]
    fn repeat_keeps_text_verbatim() {
        let parsed = PrefixCommand::parse("!", "!repeat  Meeting at 5, <@&42>  see  you\nthere ");
        assert_eq!(
            parsed,
            Some(Ok(PrefixCommand::Repeat {
                text: "Meeting at 5, <@&42>  see  you\nthere".to_string()
            }))
        );
    }

    #[test]
    fn repeat_without_text_is_usage_error() {
        assert_eq!(
            PrefixCommand::parse(">", ">repeat   "),
            Some(Err(CommandError::MissingArgument { name: "message" }))
        );
    }

    #[test]
    fn any_roles_argument_closes_registration() {
        assert_eq!(
            PrefixCommand::parse(">", ">roles disabled"),
            Some(Ok(PrefixCommand::Roles { closed: true }))
        );
    }

    #[test]
    fn ignores_other_messages() {
        assert_eq!(PrefixCommand::parse(">", "rules"), None);
        assert_eq!(PrefixCommand::parse(">", ">unknown"), None);
        assert_eq!(PrefixCommand::parse(">", ">rulesx"), None);
        assert_eq!(PrefixCommand::parse(">>", ">rules"), None);
    }

    #[test]
    fn departments_cooldown_is_per_user_twelve_hours() {
        let cooldown = CommandName::Departments.cooldown();
        assert_eq!(cooldown.uses, 1);
        assert_eq!(cooldown.per, Duration::from_secs(12 * 60 * 60));
        assert_eq!(cooldown.scope, BucketScope::User);
    }
}
