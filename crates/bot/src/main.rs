use std::sync::Arc;

use anyhow::Context;
use frameflicker_bot::config::BotConfig;
use frameflicker_bot::dispatch::{self, BotState};
use frameflicker_metadata::OmdbClient;
use teloxide::Bot;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A local .env is optional
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = BotConfig::from_env().context("failed to load configuration")?;
    info!(?config, "configuration loaded");

    let client = OmdbClient::new(config.omdb.clone()).context("failed to build OMDb client")?;

    let state = BotState {
        provider: Arc::new(client),
        artifact_dir: config.artifact_dir.clone(),
    };

    let bot = Bot::new(config.bot_token);
    info!("bot started");
    dispatch::run(bot, state).await;

    info!("bot stopped");
    Ok(())
}
