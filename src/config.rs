use std::env;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_STATS_BASE_URL: &str = "https://stats.nba.com/stats";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ROSTER_PATH: &str = "players.json";

/// Runtime settings, read once per invocation from the Lambda environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub stats_base_url: String,
    pub timeout: Duration,
    pub roster_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stats_base_url: DEFAULT_STATS_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            roster_path: DEFAULT_ROSTER_PATH.to_string(),
        }
    }
}

impl Config {
    /// `STATS_BASE_URL`, `STATS_TIMEOUT_SECS` and `ROSTER_PATH`; unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let timeout = match lookup("STATS_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(value = %raw, "Ignoring invalid STATS_TIMEOUT_SECS");
                    defaults.timeout
                }
            },
            None => defaults.timeout,
        };
        Config {
            stats_base_url: lookup("STATS_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.stats_base_url),
            timeout,
            roster_path: lookup("ROSTER_PATH").unwrap_or(defaults.roster_path),
        }
    }
}
