use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// OpenSubtitles API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// REST API base URL, without trailing endpoint path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// File holding the API key. Surrounding whitespace is ignored.
    #[serde(default = "default_key_file")]
    pub key_file: PathBuf,
    /// User-Agent sent with every request (the API rejects anonymous agents).
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Also send the key as `Authorization: Bearer <key>`.
    #[serde(default = "default_bearer_auth")]
    pub bearer_auth: bool,
    /// Request timeout in seconds, 0 disables it (default: 0)
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            key_file: default_key_file(),
            user_agent: default_user_agent(),
            bearer_auth: default_bearer_auth(),
            timeout_secs: 0,
        }
    }
}

fn default_base_url() -> String {
    "https://api.opensubtitles.com/api/v1".to_string()
}

fn default_key_file() -> PathBuf {
    PathBuf::from("api.key")
}

fn default_user_agent() -> String {
    format!("legendary v{}", env!("CARGO_PKG_VERSION"))
}

fn default_bearer_auth() -> bool {
    true
}

/// Subtitle search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Comma separated language codes passed as `languages`.
    #[serde(default = "default_languages")]
    pub languages: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            languages: default_languages(),
        }
    }
}

fn default_languages() -> String {
    "en".to_string()
}
