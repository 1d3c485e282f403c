use std::env;
use anyhow::Result;

/// Hosted backend the app talks to when nothing else is configured.
const DEFAULT_BASE_URL: &str = "https://leaderboard-system-backend-x3js.onrender.com";

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 400 }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub search: SearchConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("LEADERBOARD_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let search = SearchConfig {
            debounce_ms: env::var("SEARCH_DEBOUNCE_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(400),
        };

        Ok(Config {
            base_url: base_url.trim_end_matches('/').to_string(),
            search,
        })
    }
}
