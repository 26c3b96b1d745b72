//! Process configuration, read from environment variables at startup.
//!
//! | Variable                 | Default                               |
//! |--------------------------|---------------------------------------|
//! | `HOST`                   | `0.0.0.0`                             |
//! | `PORT`                   | `8000`                                |
//! | `OPENAI_API_KEY`         | unset (realtime proxy answers 500)    |
//! | `OPENAI_BASE_URL`        | `https://api.openai.com`              |
//! | `OPENAI_REALTIME_MODEL`  | `gpt-4o-realtime-preview-2025-06-03`  |
//! | `MENU_PATH`              | unset (bundled `data/menu.json`)      |
//! | `STATUS_INTERVAL_SECS`   | `40`                                  |
//! | `STATUS_REPLAY_INITIAL`  | `false`                               |

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_STATUS_INTERVAL: Duration = Duration::from_secs(40);
pub const DEFAULT_REALTIME_MODEL: &str = "gpt-4o-realtime-preview-2025-06-03";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("failed to load menu from {path}: {source}")]
    Menu {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// How progression tasks walk the lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulerConfig {
    /// Sleep before each status change.
    pub interval: Duration,
    /// Re-apply `created` as the first delayed step before moving to `preparing`.
    pub replay_initial_status: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_STATUS_INTERVAL,
            replay_initial_status: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub realtime_model: String,
    pub menu_path: Option<PathBuf>,
    pub scheduler: SchedulerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.into(),
            realtime_model: DEFAULT_REALTIME_MODEL.into(),
            menu_path: None,
            scheduler: SchedulerConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => parse("PORT", raw)?,
            None => defaults.port,
        };
        let interval = match get("STATUS_INTERVAL_SECS") {
            Some(raw) => Duration::from_secs(parse("STATUS_INTERVAL_SECS", raw)?),
            None => defaults.scheduler.interval,
        };
        let replay_initial_status = match get("STATUS_REPLAY_INITIAL") {
            Some(raw) => parse_flag("STATUS_REPLAY_INITIAL", raw)?,
            None => defaults.scheduler.replay_initial_status,
        };

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            openai_api_key: get("OPENAI_API_KEY"),
            openai_base_url: get("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.openai_base_url),
            realtime_model: get("OPENAI_REALTIME_MODEL").unwrap_or(defaults.realtime_model),
            menu_path: get("MENU_PATH").map(PathBuf::from),
            scheduler: SchedulerConfig {
                interval,
                replay_initial_status,
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T>(key: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key,
        reason: e.to_string(),
        value: raw,
    })
}

fn parse_flag(key: &'static str, raw: String) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw,
            reason: "expected a boolean".into(),
        }),
    }
}
