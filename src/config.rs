//! Environment-based configuration.
//!
//! The log channel and moderator role default to the CodeX server; every other
//! Discord ID must be provided. The department catalog is built here once and
//! handed to the bot as part of `Config`.

use std::collections::HashSet;
use std::path::PathBuf;

use serenity::all::{ChannelId, GuildId, RoleId};

use crate::error::{config::ConfigError, AppError};
use crate::model::department::{Department, DepartmentCatalog};

const DEFAULT_PREFIX: &str = ">";
const DEFAULT_ASSETS_DIR: &str = "assets";

const DEFAULT_CHANNEL_LOG: u64 = 1035618172402925659;
const DEFAULT_ROLE_MODERATOR: u64 = 1037793218756104292;

/// `(code, label, emoji)` for each department; role IDs come from `DEPT_<CODE>`.
const DEFAULT_DEPARTMENTS: [(&str, &str, &str); 6] = [
    ("cxsd", "CXSD - Software Development", "\u{1F4BB}"),
    ("cxgd", "CXGD - Game Development", "\u{1F3AE}"),
    ("cxcp", "CXCP - Competitive Programming", "\u{1F3C1}"),
    ("cxit", "CXIT - Information Technology", "\u{2601}"),
    ("cxad", "CXAD - App Development", "\u{1F4F1}"),
    ("cxds", "CXDS - Data Science", "\u{1F522}"),
];

/// Select menus hold at most 25 options.
const MAX_CATALOG_SIZE: usize = 25;

/// Embed colors.
pub mod colors {
    pub const GREEN: u32 = 0x2ECC71;
    pub const ORANGE: u32 = 0xE67E22;
    pub const BLUE: u32 = 0x3498DB;
    pub const YELLOW: u32 = 0xF1C40F;
}

/// Club branding used as embed author.
pub mod brand {
    pub const NAME: &str = "Team CodeX";
    pub const ICON_URL: &str = "https://codex.mitb.club/brand_enlarged.png";
    pub const SERVER_NAME: &str = "CodeX";
}

/// Channels the bot posts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channels {
    /// Member join/leave log.
    pub log: ChannelId,
    /// Server rules, linked from welcome messages.
    pub rules: ChannelId,
    /// Registration and department audit log.
    pub member_info: ChannelId,
}

/// Status roles used by command gates and registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roles {
    pub moderator: RoleId,
    pub guest: RoleId,
    pub member: RoleId,
}

pub struct Config {
    pub bot_token: String,
    pub prefix: String,
    /// Guilds to register slash commands in; empty means register globally.
    pub test_guilds: Vec<GuildId>,
    pub registration_disabled: bool,
    pub assets_dir: PathBuf,

    pub channels: Channels,
    pub roles: Roles,
    pub departments: DepartmentCatalog,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All values present and valid
    /// - `Err(AppError::ConfigErr)` - Missing token or Discord ID, unparsable
    ///   value, or overlapping role IDs
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = lookup("BOT_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("BOT_TOKEN".to_string()))?;

        let channels = Channels {
            log: ChannelId::new(snowflake(&lookup, "CHANNEL_LOG", DEFAULT_CHANNEL_LOG)?),
            rules: ChannelId::new(required_snowflake(&lookup, "CHANNEL_RULES")?),
            member_info: ChannelId::new(required_snowflake(&lookup, "CHANNEL_MEMBER_INFO")?),
        };

        let roles = Roles {
            moderator: RoleId::new(snowflake(&lookup, "ROLE_MODERATOR", DEFAULT_ROLE_MODERATOR)?),
            guest: RoleId::new(required_snowflake(&lookup, "ROLE_GUEST")?),
            member: RoleId::new(required_snowflake(&lookup, "ROLE_MEMBER")?),
        };

        let departments = match lookup("DEPARTMENTS") {
            Some(raw) if !raw.trim().is_empty() => parse_departments(&raw)?,
            _ => default_departments(&lookup)?,
        };
        validate_departments(&departments, &roles)?;

        Ok(Self {
            bot_token,
            prefix: lookup("PREFIX")
                .filter(|prefix| !prefix.is_empty())
                .unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            test_guilds: parse_test_guilds(lookup("TEST_GUILDS"))?,
            registration_disabled: flag(&lookup, "REGISTRATION_DISABLED")?,
            assets_dir: lookup("ASSETS_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR)),
            channels,
            roles,
            departments,
        })
    }
}

fn parse_snowflake(name: &str, value: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    match value.trim().parse::<u64>() {
        Ok(0) => Err(invalid("snowflake IDs are never 0")),
        Ok(id) => Ok(id),
        Err(e) => Err(invalid(&e.to_string())),
    }
}

fn snowflake<F>(lookup: &F, name: &str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => parse_snowflake(name, &value),
        _ => Ok(default),
    }
}

fn required_snowflake<F>(lookup: &F, name: &str) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => parse_snowflake(name, &value),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

fn flag<F>(lookup: &F, name: &str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(name) else {
        return Ok(false);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        _ => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            value,
            reason: "expected true or false".to_string(),
        }),
    }
}

fn parse_test_guilds(raw: Option<String>) -> Result<Vec<GuildId>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| parse_snowflake("TEST_GUILDS", id).map(GuildId::new))
        .collect()
}

/// Default catalog, with each role ID read from `DEPT_<CODE>`.
fn default_departments<F>(lookup: &F) -> Result<DepartmentCatalog, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let departments = DEFAULT_DEPARTMENTS
        .iter()
        .map(|(code, label, emoji)| {
            let var = format!("DEPT_{}", code.to_ascii_uppercase());
            Ok(Department {
                code: code.to_string(),
                role_id: RoleId::new(required_snowflake(lookup, &var)?),
                label: label.to_string(),
                emoji: emoji.to_string(),
            })
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;

    Ok(DepartmentCatalog::new(departments))
}

/// Parses `code|role_id|label|emoji` entries separated by `;`.
fn parse_departments(raw: &str) -> Result<DepartmentCatalog, ConfigError> {
    let departments = raw
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let parts: Vec<&str> = entry.split('|').map(str::trim).collect();
            let &[code, role_id, label, emoji] = parts.as_slice() else {
                return Err(ConfigError::InvalidValue {
                    name: "DEPARTMENTS".to_string(),
                    value: entry.to_string(),
                    reason: "expected code|role_id|label|emoji".to_string(),
                });
            };

            Ok(Department {
                code: code.to_string(),
                role_id: RoleId::new(parse_snowflake("DEPARTMENTS", role_id)?),
                label: label.to_string(),
                emoji: emoji.to_string(),
            })
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;

    Ok(DepartmentCatalog::new(departments))
}

/// Department roles must be unique and disjoint from the status roles.
fn validate_departments(catalog: &DepartmentCatalog, roles: &Roles) -> Result<(), ConfigError> {
    if catalog.is_empty() || catalog.len() > MAX_CATALOG_SIZE {
        return Err(ConfigError::InvalidValue {
            name: "DEPARTMENTS".to_string(),
            value: catalog.len().to_string(),
            reason: format!("expected between 1 and {MAX_CATALOG_SIZE} departments"),
        });
    }

    let status = [roles.moderator, roles.guest, roles.member];
    let mut seen = HashSet::new();

    for department in catalog.iter() {
        if status.contains(&department.role_id) {
            return Err(ConfigError::OverlappingRoles {
                role_id: department.role_id.get(),
                usage: format!("department {} and a status role", department.code),
            });
        }
        if !seen.insert(department.role_id) {
            return Err(ConfigError::OverlappingRoles {
                role_id: department.role_id.get(),
                usage: format!("department {} and another department", department.code),
            });
        }
    }

    Ok(())
}
