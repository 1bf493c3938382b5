//! Error types for the bot.
//!
//! `AppError` is the single error type returned by every component handler. The
//! event handler logs whatever escapes a component; only the `/departments`
//! command turns `CommandError`s into user-facing replies.

pub mod command;
pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{command::CommandError, config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur while handling a gateway
/// event. Most variants use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A command gate rejected the invocation (missing role, cooldown, bad usage).
    #[error(transparent)]
    CommandErr(#[from] CommandError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Department selection could not be resolved against the configured catalog.
    ///
    /// # Fields
    /// - Message describing why the selection was rejected
    #[error("Invalid department selection: {0}")]
    InvalidSelection(String),

    /// Unexpected behavior indicating a possible bug.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
