//! Component logic invoked by the bot's event handlers.
//!
//! Each service owns one component of the bot and performs its Discord API calls:
//!
//! - `member_log` - Join/leave notifications
//! - `announcement` - Rules, repeated messages and the registration panel
//! - `registration` - Panel buttons and the registration modal
//! - `department` - `/departments` and the department select menu
//!
//! Supporting modules:
//!
//! - `builder` - Pure message, embed and component builders
//! - `cooldown` - Rate-limit buckets
//! - `guard` - Role and cooldown gates for commands

pub mod announcement;
pub mod builder;
pub mod cooldown;
pub mod department;
pub mod guard;
pub mod member_log;
pub mod registration;
