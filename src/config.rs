//! Build-time Configuration
//!
//! The bundle runs in the browser, so settings are read from environment
//! variables when the crate is compiled:
//!
//! - `CLEANSPACE_API_URL`: base URL of the booking API (default: `/api`)
//! - `CLEANSPACE_LOG`: log level (default: `info`)
//! - `CLEANSPACE_TOAST_MS`: notification lifetime in milliseconds (default: 4000)

use log::LevelFilter;

const DEFAULT_API_URL: &str = "/api";
const DEFAULT_TOAST_MS: u32 = 4000;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LevelFilter,
    pub toast_ttl_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            log_level: LevelFilter::Info,
            toast_ttl_ms: DEFAULT_TOAST_MS,
        }
    }
}

impl AppConfig {
    /// Configuration baked in at compile time
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("CLEANSPACE_API_URL"),
            option_env!("CLEANSPACE_LOG"),
            option_env!("CLEANSPACE_TOAST_MS"),
        )
    }

    /// Unset or unparseable values fall back to the defaults
    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>, toast_ms: Option<&str>) -> Self {
        let defaults = Self::default();

        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        let log_level = log_level
            .and_then(|level| level.trim().parse::<LevelFilter>().ok())
            .unwrap_or(defaults.log_level);

        let toast_ttl_ms = toast_ms
            .and_then(|ms| ms.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.toast_ttl_ms);

        Self { api_base_url, log_level, toast_ttl_ms }
    }
}
