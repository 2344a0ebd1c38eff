use anyhow::{Context, Result};

use crate::api::parsers;
use crate::http::HttpClient;

/// Client for the keeper live snapshot of a BF4 server
#[derive(Debug, Clone)]
pub struct KeeperClient {
    client: HttpClient,
    url: String,
}

impl KeeperClient {
    pub fn new(client: HttpClient, base_url: &str, guid: &str) -> Self {
        let url = Self::build_snapshot_url(base_url, guid);
        Self { client, url }
    }

    /// Fetch the number of players currently on a team
    pub async fn fetch_player_count(&self) -> Result<i64> {
        let data = self.client.get_json(&self.url).await?;
        parsers::count_team_players(&data).context("Keeper snapshot has no team rosters")
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn build_snapshot_url(base_url: &str, guid: &str) -> String {
        format!(
            "{}/snapshot/{}",
            base_url.trim_end_matches('/'),
            urlencoding::encode(guid)
        )
    }
}
