//! Configuration loaded from the environment.

use crate::api::{
    SteamWorkshopAPIBuilder,
    DEFAULT_COLLECTION_URL_TEMPLATE,
    DEFAULT_PUBLISHED_FILE_DETAILS_URL,
};
use crate::error::ConfigError;
use crate::rate_limiter::DEFAULT_REQUEST_INTERVAL;
use std::path::Path;
use std::time::Duration;

/// Collection page URL template. `{id}` is replaced with the collection ID.
pub const COLLECTION_URL_VAR: &str = "WORKSHOP_COLLECTION_URL";
/// URL for `GetPublishedFileDetails`.
pub const STEAM_API_URL_VAR: &str = "STEAM_API_URL";
/// Minimum interval between metadata requests in milliseconds. `0` disables limiting.
pub const REQUEST_INTERVAL_VAR: &str = "STEAM_API_REQUEST_INTERVAL_MS";

/// Where to find Steam and how often to call it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub collection_url_template: String,
    pub published_file_details_url: String,
    pub request_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collection_url_template: DEFAULT_COLLECTION_URL_TEMPLATE.into(),
            published_file_details_url: DEFAULT_PUBLISHED_FILE_DETAILS_URL.into(),
            request_interval: DEFAULT_REQUEST_INTERVAL,
        }
    }
}

impl Config {
    /// Loads the config from environment variables, reading a `.env` file first if there is one.
    /// Variables already set take precedence over the file. Unset variables use the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }
    
    /// Same as [`Config::from_env`] but reads the `.env` file at `path`, which must exist.
    pub fn from_env_file<P>(path: P) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
    {
        dotenv::from_path(path.as_ref())?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }
    
    /// Loads the config using `lookup` to read variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        
        if let Some(template) = lookup(COLLECTION_URL_VAR) {
            config.collection_url_template = template;
        }
        
        if let Some(url) = lookup(STEAM_API_URL_VAR) {
            config.published_file_details_url = url;
        }
        
        if let Some(interval) = lookup(REQUEST_INTERVAL_VAR) {
            let millis = interval.trim().parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue(REQUEST_INTERVAL_VAR, interval))?;
            
            config.request_interval = Duration::from_millis(millis);
        }
        
        Ok(config)
    }
    
    /// A builder for an API using this config.
    pub fn api_builder(&self) -> SteamWorkshopAPIBuilder {
        SteamWorkshopAPIBuilder::new()
            .collection_url_template(self.collection_url_template.as_str())
            .published_file_details_url(self.published_file_details_url.as_str())
            .request_interval(self.request_interval)
    }
}
