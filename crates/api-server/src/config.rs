//! Server configuration from environment variables
//!
//! | Variable | Default |
//! |---|---|
//! | `TASKDESK_BIND_ADDR` | `0.0.0.0:8080` |
//! | `TASKDESK_STORE` | `sql` (`sql` or `memory`) |
//! | `TASKDESK_DATABASE_URL` | `sqlite://taskdesk.db?mode=rwc` |
//! | `TASKDESK_DB_MAX_CONNECTIONS` | `5` |
//! | `TASKDESK_CORS_PERMISSIVE` | `true` |
//! | `TASKDESK_REQUEST_TIMEOUT_SECS` | `10` |

use std::net::SocketAddr;
use std::time::Duration;

use serde::Serialize;
use tracing::warn;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://taskdesk.db?mode=rwc";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Which repository implementation backs the services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    Sql,
    Memory,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sql => "sql",
            Self::Memory => "memory",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "sql" | "sqlite" => Some(Self::Sql),
            "memory" | "mem" | "in-memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub store: StoreKind,
    pub database_url: String,
    pub max_connections: u32,
    pub cors_permissive: bool,
    /// Upper bound on handling one request; slower ones get 408
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            store: StoreKind::Sql,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: taskdesk_core::db::DEFAULT_MAX_CONNECTIONS,
            cors_permissive: true,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source. Unparseable values fall
    /// back to the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = parse_or(&lookup, "TASKDESK_BIND_ADDR", defaults.bind_addr, |raw| {
            raw.trim().parse::<SocketAddr>().ok()
        });
        let store = parse_or(&lookup, "TASKDESK_STORE", defaults.store, StoreKind::parse);
        let max_connections = parse_or(
            &lookup,
            "TASKDESK_DB_MAX_CONNECTIONS",
            defaults.max_connections,
            |raw| raw.trim().parse::<u32>().ok().filter(|n| *n > 0),
        );
        let cors_permissive = parse_or(
            &lookup,
            "TASKDESK_CORS_PERMISSIVE",
            defaults.cors_permissive,
            parse_flag,
        );
        let request_timeout = parse_or(
            &lookup,
            "TASKDESK_REQUEST_TIMEOUT_SECS",
            defaults.request_timeout,
            |raw| {
                raw.trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|n| *n > 0)
                    .map(Duration::from_secs)
            },
        );
        let database_url = lookup("TASKDESK_DATABASE_URL")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .unwrap_or(defaults.database_url);

        Self {
            bind_addr,
            store,
            database_url,
            max_connections,
            cors_permissive,
            request_timeout,
        }
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> T {
    let Some(raw) = lookup(name) else {
        return default;
    };
    match parse(&raw) {
        Some(value) => value,
        None => {
            warn!("Ignoring invalid {}={:?}, using default", name, raw);
            default
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
