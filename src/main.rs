mod bot;
mod config;
mod error;
mod model;
mod service;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::AppError;
use crate::state::BotState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    tracing::info!(
        "Loaded configuration: prefix '{}', {} departments, registration {}",
        config.prefix,
        config.departments.len(),
        if config.registration_disabled { "closed" } else { "open" }
    );

    let state = Arc::new(BotState::new(config));

    if let Err(e) = bot::start::start_bot(state).await {
        tracing::error!("Discord bot error: {}", e);
        return Err(e);
    }

    Ok(())
}
