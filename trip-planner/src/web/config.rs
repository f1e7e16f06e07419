//! Server configuration from the environment.

use std::net::{AddrParseError, SocketAddr};
use std::num::ParseIntError;

use crate::planner::SearchConfig;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "TRIP_PLANNER_ADDR";
/// Environment variable selecting the city network.
pub const NETWORK_VAR: &str = "TRIP_PLANNER_NETWORK";
/// Environment variable bounding the search queue.
pub const MAX_QUEUE_VAR: &str = "TRIP_PLANNER_MAX_QUEUE";

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Error reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Listen address did not parse
    #[error("invalid TRIP_PLANNER_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        source: AddrParseError,
    },

    /// Unrecognised network name
    #[error("invalid TRIP_PLANNER_NETWORK {0:?}: expected \"seed\" or \"full\"")]
    InvalidNetwork(String),

    /// Queue bound was not a non-negative integer
    #[error("invalid TRIP_PLANNER_MAX_QUEUE {value:?}: {source}")]
    InvalidQueueLimit {
        value: String,
        source: ParseIntError,
    },
}

/// Which city network the server plans over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkKind {
    /// The four-city ring
    #[default]
    Seed,
    /// Six cities, every pair connected
    Full,
}

impl NetworkKind {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seed" => Ok(NetworkKind::Seed),
            "full" => Ok(NetworkKind::Full),
            _ => Err(ConfigError::InvalidNetwork(s.to_string())),
        }
    }
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// City network to load at startup.
    pub network: NetworkKind,

    /// Bounds applied to every search.
    pub search: SearchConfig,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a variable lookup function.
    ///
    /// Unset variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_value = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr_value.clone(),
                source,
            })?;

        let network = match lookup(NETWORK_VAR) {
            Some(value) => NetworkKind::parse(&value)?,
            None => NetworkKind::default(),
        };

        let mut search = SearchConfig::default();
        if let Some(value) = lookup(MAX_QUEUE_VAR) {
            let limit = value
                .trim()
                .parse::<usize>()
                .map_err(|source| ConfigError::InvalidQueueLimit {
                    value: value.clone(),
                    source,
                })?;
            search = search.with_max_queue_len(limit);
        }

        Ok(Self {
            addr,
            network,
            search,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            network: NetworkKind::Seed,
            search: SearchConfig::default(),
        }
    }
}
