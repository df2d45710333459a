//! Application configuration.
//!
//! Built from defaults, then the environment, then command-line overrides:
//!
//! ```ignore
//! use folio::config::AppConfig;
//!
//! let config = AppConfig::from_env().with_api_base_url("http://localhost:9000");
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::api::normalize_base_url;

/// Env var overriding the blog backend base URL
pub const API_BASE_URL_ENV: &str = "FOLIO_API_BASE_URL";
/// Env var overriding the preferences file path
pub const PREFERENCES_ENV: &str = "FOLIO_PREFERENCES";
/// Env var holding the log filter
pub const LOG_FILTER_ENV: &str = "FOLIO_LOG";

/// Base URL used when neither build time nor runtime configure one
pub const FALLBACK_API_BASE_URL: &str = "http://localhost:8080";

/// Default request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Base URL baked in at build time, if `FOLIO_API_BASE_URL` was set then.
pub fn build_time_api_base_url() -> &'static str {
    option_env!("FOLIO_API_BASE_URL").unwrap_or(FALLBACK_API_BASE_URL)
}

/// Default log file: `<data_local_dir>/folio/folio.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("folio").join("folio.log"))
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend base URL without trailing slash
    pub api_base_url: String,
    /// Preferences file; `None` uses the platform config dir
    pub preferences_path: Option<PathBuf>,
    pub request_timeout: Duration,
    /// Log file; `None` disables file logging
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: normalize_base_url(build_time_api_base_url()),
            preferences_path: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            log_path: default_log_path(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL. One trailing slash is stripped.
    pub fn with_api_base_url(mut self, url: impl AsRef<str>) -> Self {
        self.api_base_url = normalize_base_url(url.as_ref());
        self
    }

    pub fn with_preferences_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.preferences_path = Some(path.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_log_path(mut self, path: Option<PathBuf>) -> Self {
        self.log_path = path;
        self
    }

    /// Defaults overridden by `FOLIO_API_BASE_URL` and `FOLIO_PREFERENCES`.
    ///
    /// Empty values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = non_empty_env(API_BASE_URL_ENV) {
            config = config.with_api_base_url(url);
        }
        if let Some(path) = non_empty_env(PREFERENCES_ENV) {
            config = config.with_preferences_path(path);
        }

        config
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
