//! Server configuration read from the environment.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use crate::planner::SearchConfig;

/// Default location of the station file.
const DEFAULT_STATIONS_PATH: &str = "stations.json";

/// Default listen address.
const DEFAULT_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 3000));

/// Everything the server binary needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Path to the station JSON file (`METRO_STATIONS`).
    pub stations_path: PathBuf,

    /// Address to listen on (`METRO_ADDR`).
    pub bind_addr: SocketAddr,

    /// Search parameters (`METRO_MAX_RESULTS`, `METRO_MAX_PATH_LENGTH`,
    /// `METRO_TRANSFER_PENALTY_SECS`, `METRO_DWELL_SECS`).
    pub search: SearchConfig,
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults for
    /// missing or unparseable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = SearchConfig::default();
        let stations_path = lookup("METRO_STATIONS")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIONS_PATH));

        let bind_addr = setting(&lookup, "METRO_ADDR", DEFAULT_ADDR);

        let search = SearchConfig::new(
            setting(&lookup, "METRO_MAX_RESULTS", defaults.max_results),
            setting(&lookup, "METRO_MAX_PATH_LENGTH", defaults.max_path_length),
            setting(
                &lookup,
                "METRO_TRANSFER_PENALTY_SECS",
                defaults.transfer_penalty_secs,
            ),
            setting(&lookup, "METRO_DWELL_SECS", defaults.dwell_secs),
        );

        Self {
            stations_path,
            bind_addr,
            search,
        }
    }
}

/// Parse `key` if set, warning and returning `default` if it does not parse.
fn setting<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "ignoring unparseable setting");
            default
        }),
    }
}
