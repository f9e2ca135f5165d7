use std::path::PathBuf;
use std::time::Duration;

use frameflicker_metadata::OmdbConfig;
use frameflicker_metadata::omdb::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use thiserror::Error;

pub const BOT_TOKEN_VAR: &str = "FRAMEFLICKER_BOT_TOKEN";
pub const TELOXIDE_TOKEN_VAR: &str = "TELOXIDE_TOKEN";
pub const API_KEY_VAR: &str = "FRAMEFLICKER_OMDB_API_KEY";
pub const OMDB_URL_VAR: &str = "FRAMEFLICKER_OMDB_URL";
pub const TIMEOUT_VAR: &str = "FRAMEFLICKER_HTTP_TIMEOUT_SECS";
pub const ARTIFACT_DIR_VAR: &str = "FRAMEFLICKER_ARTIFACT_DIR";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Startup configuration, built once and handed to the client and dispatcher.
#[derive(Clone)]
pub struct BotConfig {
    pub bot_token: String,
    pub omdb: OmdbConfig,
    /// When set, `/details` artifacts are also written here.
    pub artifact_dir: Option<PathBuf>,
}

impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("bot_token", &"<redacted>")
            .field("omdb_url", &self.omdb.base_url)
            .field("timeout", &self.omdb.timeout)
            .field("artifact_dir", &self.artifact_dir)
            .finish()
    }
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        // Blank values count as unset.
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bot_token = get(BOT_TOKEN_VAR)
            .or_else(|| get(TELOXIDE_TOKEN_VAR))
            .ok_or(ConfigError::Missing(BOT_TOKEN_VAR))?;
        let api_key = get(API_KEY_VAR).ok_or(ConfigError::Missing(API_KEY_VAR))?;

        let timeout = match get(TIMEOUT_VAR) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: TIMEOUT_VAR,
                        value: raw,
                    });
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            bot_token,
            omdb: OmdbConfig {
                api_key,
                base_url: get(OMDB_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                timeout,
            },
            artifact_dir: get(ARTIFACT_DIR_VAR).map(PathBuf::from),
        })
    }
}
