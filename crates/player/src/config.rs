//! Record store configuration, read from the environment.

use std::str::FromStr;
use std::time::Duration;

/// Default base URL of the record store.
pub const DEFAULT_STORE_URL: &str = "https://recruiting.verylongdomaintotestwith.ca/api/{dootyonn}";

/// Default path of the character record under the base URL.
pub const DEFAULT_RECORD_PATH: &str = "character";

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP method used to write the record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SaveMethod {
    #[default]
    Put,
    Post,
}

impl FromStr for SaveMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "put" => Ok(Self::Put),
            "post" => Ok(Self::Post),
            other => Err(ConfigError::Invalid {
                key: "CHARSHEET_SAVE_METHOD",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub base_url: String,
    pub record_path: String,
    pub timeout: Duration,
    pub save_method: SaveMethod,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_STORE_URL.to_string(),
            record_path: DEFAULT_RECORD_PATH.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            save_method: SaveMethod::default(),
        }
    }
}

impl StoreConfig {
    /// Read configuration from process environment variables.
    ///
    /// - `CHARSHEET_STORE_URL`
    /// - `CHARSHEET_RECORD_PATH`
    /// - `CHARSHEET_STORE_TIMEOUT_SECS`
    /// - `CHARSHEET_SAVE_METHOD` (`put` or `post`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup("CHARSHEET_STORE_URL")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.base_url);

        let record_path = lookup("CHARSHEET_RECORD_PATH")
            .map(|s| s.trim().trim_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.record_path);

        let timeout = match lookup("CHARSHEET_STORE_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) => Duration::from_secs(secs),
                Err(_) => {
                    tracing::warn!(
                        value = %raw,
                        default = DEFAULT_TIMEOUT_SECS,
                        "Unparsable CHARSHEET_STORE_TIMEOUT_SECS, using default"
                    );
                    defaults.timeout
                }
            },
            None => defaults.timeout,
        };

        let save_method = match lookup("CHARSHEET_SAVE_METHOD") {
            Some(raw) => raw.parse()?,
            None => defaults.save_method,
        };

        Ok(Self {
            base_url,
            record_path,
            timeout,
            save_method,
        })
    }

    /// Full URL of the character record.
    pub fn record_url(&self) -> String {
        format!("{}/{}", self.base_url, self.record_path)
    }
}
