use std::env::{self, VarError};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

pub const DEFAULT_BASE_URL: &str = "https://news.lowtech.io";
pub const DEFAULT_API_PATH: &str = "/api/v1";
pub const DEFAULT_SEARCH_PATH: &str = "/search/";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_path: String,
    pub search_path: String,
    pub default_trending_hours: u32,
    pub default_trending_words: u32,
    pub max_display_results: usize,
    /// `None` leaves the HTTP client's own default in place.
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_path: DEFAULT_API_PATH.to_string(),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            default_trending_hours: 24,
            default_trending_words: 20,
            max_display_results: 3,
            request_timeout: None,
        }
    }
}

impl Config {
    /// Builds a config pointed at another host, keeping every other default.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let defaults = Self::default();

        let base_url = optional_var("NEWS_BASE_URL")?.unwrap_or(defaults.base_url);
        let api_path = optional_var("NEWS_API_PATH")?.unwrap_or(defaults.api_path);
        let search_path = optional_var("NEWS_SEARCH_PATH")?.unwrap_or(defaults.search_path);

        let default_trending_hours =
            parsed_var("NEWS_TRENDING_HOURS")?.unwrap_or(defaults.default_trending_hours);
        let default_trending_words =
            parsed_var("NEWS_TRENDING_WORDS")?.unwrap_or(defaults.default_trending_words);
        let max_display_results =
            parsed_var("NEWS_MAX_RESULTS")?.unwrap_or(defaults.max_display_results);
        let request_timeout = parsed_var::<u64>("NEWS_REQUEST_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .or(defaults.request_timeout);

        Ok(Config {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_path,
            search_path,
            default_trending_hours,
            default_trending_words,
            max_display_results,
            request_timeout,
        })
    }

    pub fn api_url(&self) -> String {
        format!("{}{}", self.base_url, self.api_path)
    }

    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, self.search_path)
    }
}

fn optional_var(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn parsed_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    optional_var(name)?
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| AppError::ConfigError(format!("Invalid {}: {}", name, e)))
        })
        .transpose()
}
