use std::env;
use std::net::SocketAddr;

use thiserror::Error;

const BIND_ADDR: &str = "TIMESHEET_BIND_ADDR";
const SEED_DEMO_DATA: &str = "TIMESHEET_SEED_DEMO_DATA";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} is not a valid socket address: {value}")]
    InvalidBindAddr { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub seed_demo_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup(BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr {
                key: BIND_ADDR,
                value: raw_addr.clone(),
            })?;

        let seed_demo_data = match lookup(SEED_DEMO_DATA) {
            Some(v) => !matches!(
                v.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "off" | "no"
            ),
            None => true,
        };

        Ok(Self {
            bind_addr,
            seed_demo_data,
        })
    }
}
