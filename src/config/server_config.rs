//! config/server_config.rs
//! Listener settings, read from the environment (and `.env`, loaded in main).

use std::str::FromStr;

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 5022,
            workers: 1,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or blank variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let workers = parse_or(value("APP_WORKERS"), "APP_WORKERS", defaults.workers)?;
        if workers == 0 {
            anyhow::bail!("APP_WORKERS must be at least 1");
        }

        Ok(ServerConfig {
            host: value("APP_HOST").unwrap_or(defaults.host),
            port: parse_or(value("APP_PORT"), "APP_PORT", defaults.port)?,
            workers,
        })
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {}: '{}'", key, raw)),
        None => Ok(default),
    }
}
