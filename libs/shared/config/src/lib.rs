use std::env;
use tracing::warn;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SLOT_BROWSER_DAYS: u32 = 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub api_timeout_secs: u64,
    pub slot_browser_days: u32,
    api_base_url_from_env: bool,
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            api_timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            slot_browser_days: DEFAULT_SLOT_BROWSER_DAYS,
            api_base_url_from_env: true,
        }
    }

    pub fn from_env() -> Self {
        let api_base_url = env::var("CLINIC_API_BASE_URL").ok();
        let api_base_url_from_env = api_base_url.is_some();

        let config = Self {
            api_base_url: api_base_url
                .unwrap_or_else(|| {
                    warn!("CLINIC_API_BASE_URL not set, using default");
                    DEFAULT_API_BASE_URL.to_string()
                }),
            api_timeout_secs: env::var("CLINIC_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| {
                    v.parse().map_err(|_| {
                        warn!("CLINIC_API_TIMEOUT_SECS is not a number: {}", v);
                    }).ok()
                })
                .unwrap_or(DEFAULT_API_TIMEOUT_SECS),
            slot_browser_days: env::var("CLINIC_SLOT_BROWSER_DAYS")
                .ok()
                .and_then(|v| {
                    v.parse().map_err(|_| {
                        warn!("CLINIC_SLOT_BROWSER_DAYS is not a number: {}", v);
                    }).ok()
                })
                .unwrap_or(DEFAULT_SLOT_BROWSER_DAYS),
            api_base_url_from_env,
        };

        if !config.is_configured() {
            warn!("Clinic client not fully configured - falling back to local API");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        self.api_base_url_from_env && !self.api_base_url.is_empty()
    }

    /// Base URL without a trailing slash, so paths can always start with `/`.
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}
