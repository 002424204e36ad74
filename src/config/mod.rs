//! Application configuration.
//!
//! Settings live in `~/.marquee/config.json`. Every field has a default,
//! so a partial file (or none at all) is fine. A few environment
//! variables override the file:
//!
//! | Variable               | Field          |
//! |------------------------|----------------|
//! | `TMDB_API_KEY`         | `api_key`      |
//! | `MARQUEE_API_BASE_URL` | `api_base_url` |
//! | `MARQUEE_LANGUAGE`     | `language`     |

mod manager;

pub use manager::{ConfigManager, CONFIG_DIR, CONFIG_FILE};

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::adapters::{DEFAULT_API_BASE_URL, DEFAULT_IMAGE_BASE_URL, DEFAULT_IMAGE_SIZE};
use crate::error::ConfigError;

pub const ENV_API_KEY: &str = "TMDB_API_KEY";
pub const ENV_API_BASE_URL: &str = "MARQUEE_API_BASE_URL";
pub const ENV_LANGUAGE: &str = "MARQUEE_LANGUAGE";

/// User-facing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Catalog API key. Without one every catalog call fails.
    pub api_key: Option<String>,
    pub language: String,
    /// Optional ISO 3166-1 region for list endpoints
    pub region: Option<String>,
    pub image_base_url: String,
    pub image_size: String,
    pub request_timeout_secs: u64,
    /// Seconds between carousel auto-advances
    pub carousel_interval_secs: u64,
    /// Render loop tick in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            language: "en-US".to_string(),
            region: None,
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            image_size: DEFAULT_IMAGE_SIZE.to_string(),
            request_timeout_secs: 10,
            carousel_interval_secs: 4,
            tick_rate_ms: 100,
        }
    }
}

impl AppConfig {
    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides looked up through `lookup`. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(api_key) = get(ENV_API_KEY) {
            self.api_key = Some(api_key);
        }
        if let Some(base_url) = get(ENV_API_BASE_URL) {
            self.api_base_url = base_url;
        }
        if let Some(language) = get(ENV_LANGUAGE) {
            self.language = language;
        }
    }

    /// Reject settings the app cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_rate_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.carousel_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "carousel_interval_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Carousel interval expressed in render ticks, rounded up.
    pub fn carousel_interval_ticks(&self) -> u64 {
        let interval_ms = self.carousel_interval_secs.saturating_mul(1000);
        interval_ms.div_ceil(self.tick_rate_ms.max(1)).max(1)
    }
}
