//! Environment-driven configuration, read once at startup.

use std::env;

use faqscope_http::DEFAULT_API_BASE_URL;

/// Runtime configuration for the desktop app. The app takes no CLI
/// arguments; everything comes from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the FAQ admin controller.
    pub api_base_url: String,
    /// Bearer token for any auth-requiring endpoint. Both search endpoints
    /// are exempt, so this is normally absent.
    pub api_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("FAQSCOPE_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            api_token: env::var("FAQSCOPE_API_TOKEN").ok(),
        }
    }
}
