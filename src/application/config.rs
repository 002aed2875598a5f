//! Runtime configuration: compiled-in defaults, overridable from the page query string
//! (`?api=http://localhost:5000&poll=5000&log=debug`).

use crate::domain::dashboard::DEFAULT_HIGH_CHANGE_THRESHOLD;
use crate::domain::errors::ConfigurationError;
use crate::domain::logging::LogLevel;

pub const DEFAULT_POLL_INTERVAL_MS: u32 = 3_000;
pub const DEFAULT_NOTIFICATION_MS: u32 = 3_000;
const MIN_INTERVAL_MS: u32 = 500;

/// Query keys understood by [`DashboardConfig::from_pairs`]
pub const QUERY_KEYS: [&str; 5] = ["api", "poll", "notify", "threshold", "log"];

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Prefix for every endpoint; empty means same origin
    pub api_base: String,
    pub poll_interval_ms: u32,
    pub notification_ms: u32,
    pub high_change_threshold: f64,
    pub log_level: LogLevel,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            notification_ms: DEFAULT_NOTIFICATION_MS,
            high_change_threshold: DEFAULT_HIGH_CHANGE_THRESHOLD,
            log_level: if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Info },
        }
    }
}

impl DashboardConfig {
    /// Apply overrides on top of the defaults. Invalid values leave the default in
    /// place and are returned so the caller can log them once a logger exists.
    pub fn from_pairs<I, K, V>(pairs: I) -> (Self, Vec<ConfigurationError>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        for (key, value) in pairs {
            if let Err(error) = config.apply(key.as_ref(), value.as_ref()) {
                errors.push(error);
            }
        }

        (config, errors)
    }

    /// Parse a raw query string. Values are taken literally (no percent-decoding).
    pub fn parse_query(query: &str) -> (Self, Vec<ConfigurationError>) {
        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")));
        Self::from_pairs(pairs)
    }

    /// Read overrides from `window.location.search`.
    pub fn from_window() -> (Self, Vec<ConfigurationError>) {
        let Some(search) = web_sys::window().and_then(|window| window.location().search().ok()) else {
            return (Self::default(), Vec::new());
        };
        let Ok(params) = web_sys::UrlSearchParams::new_with_str(&search) else {
            return Self::parse_query(&search);
        };

        let pairs: Vec<(&str, String)> = QUERY_KEYS
            .iter()
            .filter_map(|key| params.get(key).map(|value| (*key, value)))
            .collect();
        Self::from_pairs(pairs)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigurationError> {
        match key {
            "api" => {
                self.api_base = value.trim().trim_end_matches('/').to_string();
            }
            "poll" => self.poll_interval_ms = parse_interval(key, value)?,
            "notify" => self.notification_ms = parse_interval(key, value)?,
            "threshold" => {
                let threshold = value
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|threshold| threshold.is_finite())
                    .ok_or_else(|| invalid(key, value))?;
                if threshold < 0.0 {
                    return Err(ConfigurationError::OutOfRange {
                        key: key.to_string(),
                        value: value.to_string(),
                        min: "0".to_string(),
                    });
                }
                self.high_change_threshold = threshold;
            }
            "log" => self.log_level = LogLevel::from_name(value).ok_or_else(|| invalid(key, value))?,
            // unrelated page parameters
            _ => {}
        }
        Ok(())
    }
}

fn parse_interval(key: &str, value: &str) -> Result<u32, ConfigurationError> {
    let ms = value.trim().parse::<u32>().map_err(|_| invalid(key, value))?;
    if ms < MIN_INTERVAL_MS {
        return Err(ConfigurationError::OutOfRange {
            key: key.to_string(),
            value: value.to_string(),
            min: MIN_INTERVAL_MS.to_string(),
        });
    }
    Ok(ms)
}

fn invalid(key: &str, value: &str) -> ConfigurationError {
    ConfigurationError::InvalidParameter { key: key.to_string(), value: value.to_string() }
}
