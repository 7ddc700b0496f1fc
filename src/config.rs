//! Configuration
//!
//! Baked in at build time (`ITEM_BOARD_*` environment variables), since the
//! bundle has no filesystem or process environment at runtime.

pub const DEFAULT_API_URL: &str = "http://localhost:3001";
pub const DEFAULT_NOTICE_LIMIT: usize = 5;
pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 4000;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Items API root, without trailing slash
    pub api_base_url: String,
    /// Most notices shown at once
    pub notice_limit: usize,
    /// Auto-dismiss delay for notices
    pub notice_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            notice_limit: DEFAULT_NOTICE_LIMIT,
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("ITEM_BOARD_API_URL"),
            option_env!("ITEM_BOARD_NOTICE_TIMEOUT_MS"),
        )
    }

    fn from_values(api_url: Option<&str>, notice_timeout_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        let api_base_url = api_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.api_base_url);
        let notice_timeout_ms = notice_timeout_ms
            .and_then(|ms| ms.trim().parse().ok())
            .unwrap_or(defaults.notice_timeout_ms);
        Self {
            api_base_url,
            notice_timeout_ms,
            ..defaults
        }
    }
}
