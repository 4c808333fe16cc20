//! Configuration management utilities

use crate::constants::{DATABASE_URL_ENV, DB_MAX_CONNECTIONS_ENV, DB_MIN_CONNECTIONS_ENV};
use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    pub const DEFAULT_MIN_CONNECTIONS: u32 = 1;

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: Self::DEFAULT_MAX_CONNECTIONS,
            min_connections: Self::DEFAULT_MIN_CONNECTIONS,
        }
    }

    /// Load configuration from `BRANDVUE_DATABASE_URL` and the optional pool size variables
    pub fn from_env() -> StoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> StoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(DATABASE_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| StoreError::configuration(DATABASE_URL_ENV, "not set"))?;

        let max_connections =
            parse_pool_size(&lookup, DB_MAX_CONNECTIONS_ENV, Self::DEFAULT_MAX_CONNECTIONS)?;
        let min_connections =
            parse_pool_size(&lookup, DB_MIN_CONNECTIONS_ENV, Self::DEFAULT_MIN_CONNECTIONS)?;

        if min_connections > max_connections {
            return Err(StoreError::configuration(
                DB_MIN_CONNECTIONS_ENV,
                format!(
                    "{} exceeds {} ({})",
                    min_connections, DB_MAX_CONNECTIONS_ENV, max_connections
                ),
            ));
        }

        Ok(Self {
            url,
            max_connections,
            min_connections,
        })
    }
}

fn parse_pool_size<F>(lookup: &F, key: &str, default: u32) -> StoreResult<u32>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|value| *value > 0)
            .ok_or_else(|| {
                StoreError::configuration(key, format!("must be a positive integer, got '{}'", raw))
            }),
    }
}
