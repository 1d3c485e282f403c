use async_trait::async_trait;
use common::{ClientError, ClientResult, Config};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::models::LeaderboardEntry;

/// Fetch operations the display surface depends on. `LeaderboardApi` is the
/// HTTP implementation; tests substitute in-memory fakes.
#[async_trait]
pub trait LeaderboardBackend: Send + Sync {
    async fn leaderboard(&self) -> ClientResult<Vec<LeaderboardEntry>>;
    async fn search(&self, username: &str) -> ClientResult<Vec<LeaderboardEntry>>;
}

#[derive(Clone)]
pub struct LeaderboardApi {
    client: Client,
    base_url: String,
}

impl LeaderboardApi {
    pub fn new(config: &Config) -> ClientResult<Self> {
        let client = Client::builder()
            .user_agent("leaderboard-viewer/0.1")
            .build()
            .map_err(ClientError::HttpRequest)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl LeaderboardBackend for LeaderboardApi {
    async fn leaderboard(&self) -> ClientResult<Vec<LeaderboardEntry>> {
        let url = format!("{}/leaderboard", self.base_url);
        debug!("Fetching leaderboard from {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::UnexpectedStatus(response.status()));
        }

        let payload: Value = response.json().await?;
        entries_from_payload(payload)
    }

    async fn search(&self, username: &str) -> ClientResult<Vec<LeaderboardEntry>> {
        let url = format!("{}/search", self.base_url);
        debug!("Searching for username {:?}", username);

        let response = self
            .client
            .get(&url)
            .query(&[("username", username)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::UnexpectedStatus(response.status()));
        }

        let payload: Value = response.json().await?;
        entries_from_payload(payload)
    }
}

/// Both endpoints promise a JSON array of entries. The search endpoint is
/// known to answer with a non-array error object instead; that is reported
/// as a malformed response and left to the caller to classify.
fn entries_from_payload(payload: Value) -> ClientResult<Vec<LeaderboardEntry>> {
    if !payload.is_array() {
        return Err(ClientError::MalformedResponse(format!(
            "expected a JSON array, got: {}",
            payload
        )));
    }

    serde_json::from_value(payload).map_err(|e| ClientError::MalformedResponse(e.to_string()))
}
