//! Discord bot integration.
//!
//! This module connects to the Discord gateway and routes every event the bot
//! cares about to the matching service. Components never call each other; they
//! are only composed through the shared `Handler`.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel availability for the cache
//! - `GUILD_MEMBERS` - Member join and leave events (privileged intent)
//! - `GUILD_MESSAGES` - Messages carrying prefix commands
//! - `MESSAGE_CONTENT` - Reading prefix command text (privileged intent)
//!
//! Note: `GUILD_MEMBERS` and `MESSAGE_CONTENT` are privileged intents and must be
//! explicitly enabled in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
