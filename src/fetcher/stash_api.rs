use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use crate::errors::{Result, SearchError};
use crate::models::StashFeed;

pub const DEFAULT_FEED_URL: &str = "http://www.pathofexile.com/api/public-stash-tabs";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    pub url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl FetchConfig {
    pub fn default_user_agent() -> String {
        format!("poesearch/{}", env!("CARGO_PKG_VERSION"))
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: Self::default_user_agent(),
        }
    }
}

pub struct StashApiClient {
    client: Client,
    config: FetchConfig,
}

impl StashApiClient {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, config })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Downloads and decodes the whole feed in one request.
    pub async fn fetch_feed(&self) -> Result<StashFeed> {
        info!(url = %self.config.url, "fetching public stash tabs");

        let response = self.client
            .get(&self.config.url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        info!(%status, "feed response received");

        if !status.is_success() {
            return Err(SearchError::Http {
                status,
                url: self.config.url.clone(),
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "decoding feed");

        let feed: StashFeed = serde_json::from_str(&body)?;
        debug!(
            stashes = feed.stashes.len(),
            items = feed.item_count(),
            next_change_id = ?feed.next_change_id,
            "feed decoded"
        );

        Ok(feed)
    }
}
