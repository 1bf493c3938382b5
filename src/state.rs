//! Bot state shared across all event handlers.
//!
//! `BotState` is built once at startup and handed to the event handler behind an
//! `Arc`. Everything except the cooldown buckets is immutable for the lifetime of
//! the process.

use crate::config::Config;
use crate::service::cooldown::CooldownService;

pub struct BotState {
    /// Channel, role and department configuration.
    pub config: Config,

    /// Cooldown buckets for rate-limited commands.
    pub cooldowns: CooldownService,
}

impl BotState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cooldowns: CooldownService::new(),
        }
    }

    /// Whether the Register button currently accepts new members.
    pub fn registration_open(&self) -> bool {
        !self.config.registration_disabled
    }
}
