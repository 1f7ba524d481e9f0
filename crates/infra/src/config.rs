//! Configuration loading and representation.
//!
//! The service runs with fixed defaults; environment variables may override
//! them for local runs and tests.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_DATABASE_PATH: &str = "vendor_b_products.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3002";

pub const DATABASE_PATH_VAR: &str = "CATALOG_DATABASE_PATH";
pub const BIND_ADDR_VAR: &str = "CATALOG_BIND_ADDR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var} '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (process env in production,
    /// a closure in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = lookup(DATABASE_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());

        let bind_addr_raw = lookup(BIND_ADDR_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                value: bind_addr_raw.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_path: PathBuf::from(database_path),
            bind_addr,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3002)),
        }
    }
}
