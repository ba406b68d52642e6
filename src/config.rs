use std::env;

use uuid::Uuid;

use crate::blockchain::{DEFAULT_DIFFICULTY, DIFF_MAX, DIFF_MIN};
use crate::error::ConfigError;

/// Runtime settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub difficulty: u32,
    /// Recipient of mining rewards.
    pub node_identifier: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup("PORT") {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidNumber { key: "PORT", source })?,
            None => 8080,
        };

        let difficulty = match lookup("POW_DIFFICULTY") {
            Some(v) => v.trim().parse::<u32>().map_err(|source| ConfigError::InvalidNumber {
                key: "POW_DIFFICULTY",
                source,
            })?,
            None => DEFAULT_DIFFICULTY,
        };
        if !(DIFF_MIN..=DIFF_MAX).contains(&difficulty) {
            return Err(ConfigError::DifficultyOutOfRange {
                got: difficulty,
                min: DIFF_MIN,
                max: DIFF_MAX,
            });
        }

        let node_identifier = lookup("NODE_ID")
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().simple().to_string());

        Ok(Self {
            host,
            port,
            difficulty,
            node_identifier,
        })
    }
}
