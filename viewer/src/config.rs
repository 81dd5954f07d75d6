use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the posts backend (the feed lives at `{api_url}api/posts/`)
    pub api_url: String,
    /// Port the viewer listens on
    pub port: u16,
    /// Timeout applied to every backend request
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            port: DEFAULT_PORT,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from a variable lookup. Missing or invalid values use the defaults.
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_url: lookup("FEED_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            request_timeout: Duration::from_secs(
                lookup("FEED_REQUEST_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    // zero would fail every backend call
                    .filter(|&secs: &u64| secs > 0)
                    .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            ),
        }
    }
}
