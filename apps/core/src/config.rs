use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;
use validator::Validate;

use crate::analysis::ClassifierStrategy;
use crate::error::AppError;

pub const ENV_STRUCTURED_DOCS_URL: &str = "STYLEWISE_STRUCTURED_DOCS_URL";
pub const ENV_DIRECT_DOCS_URL: &str = "STYLEWISE_DIRECT_DOCS_URL";
pub const ENV_CACHE_TTL_SECS: &str = "STYLEWISE_CACHE_TTL_SECS";
pub const ENV_MAX_RESULTS: &str = "STYLEWISE_MAX_RESULTS";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "STYLEWISE_REQUEST_TIMEOUT_SECS";
pub const ENV_CLASSIFIER: &str = "STYLEWISE_CLASSIFIER";
pub const ENV_LOG_FORMAT: &str = "STYLEWISE_LOG_FORMAT";
pub const ENV_LOG_LEVEL: &str = "STYLEWISE_LOG_LEVEL";

const DEFAULT_STRUCTURED_DOCS_URL: &str = "http://127.0.0.1:3535/";
const DEFAULT_DIRECT_DOCS_URL: &str = "https://developer.mozilla.org/en-US/docs/Web/CSS/";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    /// Bunyan-style JSON lines
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" | "bunyan" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Runtime settings for the engine and the host binary.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EngineConfig {
    /// Base URL of the structured documentation service.
    #[validate(url)]
    pub structured_docs_url: String,
    /// Base URL of the public reference pages.
    #[validate(url)]
    pub direct_docs_url: String,
    /// How long a cached documentation payload stays fresh.
    #[validate(range(min = 1))]
    pub cache_ttl_secs: u64,
    /// Ceiling on returned suggestions.
    #[validate(range(min = 1, max = 20))]
    pub max_results: usize,
    #[validate(range(min = 1, max = 120))]
    pub request_timeout_secs: u64,
    pub classifier: ClassifierStrategy,
    pub log_format: LogFormat,
    /// Default filter directive when `RUST_LOG` is unset.
    #[validate(length(min = 1))]
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            structured_docs_url: DEFAULT_STRUCTURED_DOCS_URL.to_string(),
            direct_docs_url: DEFAULT_DIRECT_DOCS_URL.to_string(),
            cache_ttl_secs: 3600,
            max_results: 5,
            request_timeout_secs: 10,
            classifier: ClassifierStrategy::default(),
            log_format: LogFormat::default(),
            log_level: "info".to_string(),
        }
    }
}

fn env_or<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|e| AppError::Config(format!("Invalid value for {}: {}", name, e))),
        _ => Ok(default),
    }
}

impl EngineConfig {
    /// Load from the environment (and a `.env` file if present), then validate.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_current_env()
    }

    /// Load from the process environment only.
    pub fn from_current_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let config = Self {
            structured_docs_url: env_or(ENV_STRUCTURED_DOCS_URL, defaults.structured_docs_url)?,
            direct_docs_url: env_or(ENV_DIRECT_DOCS_URL, defaults.direct_docs_url)?,
            cache_ttl_secs: env_or(ENV_CACHE_TTL_SECS, defaults.cache_ttl_secs)?,
            max_results: env_or(ENV_MAX_RESULTS, defaults.max_results)?,
            request_timeout_secs: env_or(ENV_REQUEST_TIMEOUT_SECS, defaults.request_timeout_secs)?,
            classifier: env_or(ENV_CLASSIFIER, defaults.classifier)?,
            log_format: env_or(ENV_LOG_FORMAT, defaults.log_format)?,
            log_level: env_or(ENV_LOG_LEVEL, defaults.log_level)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn structured_url(&self) -> Result<Url, AppError> {
        Ok(Url::parse(&self.structured_docs_url)?)
    }

    pub fn direct_url(&self) -> Result<Url, AppError> {
        Ok(Url::parse(&self.direct_docs_url)?)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_results, 5);
        assert_eq!(config.cache_ttl(), Duration::from_secs(3600));
        assert!(config.structured_url().is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let config = EngineConfig {
            max_results: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            request_timeout_secs: 600,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
