//! Domain models shared by the bot handlers and services.
//!
//! - `command` - Command names, cooldown rules and prefix command parsing
//! - `department` - The department catalog offered by `/departments`
//! - `registration` - Registration states, panel transitions and modal fields

pub mod command;
pub mod department;
pub mod registration;
