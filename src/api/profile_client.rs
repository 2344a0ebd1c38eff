use anyhow::Result;

use crate::api::parsers;
use crate::domain::{Game, ProfileReading};
use crate::http::HttpClient;

/// Client for the Battlelog server profile page in JSON mode
#[derive(Debug, Clone)]
pub struct ProfileClient {
    client: HttpClient,
    url: String,
}

impl ProfileClient {
    pub fn new(client: HttpClient, base_url: &str, game: Game, guid: &str) -> Self {
        let url = Self::build_profile_url(base_url, game, guid);
        Self { client, url }
    }

    pub async fn fetch_profile(&self) -> Result<ProfileReading> {
        let data = self.client.get_json(&self.url).await?;
        parsers::parse_profile(data)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn build_profile_url(base_url: &str, game: Game, guid: &str) -> String {
        format!(
            "{}/{}/servers/show/pc/{}?json=1",
            base_url.trim_end_matches('/'),
            game.slug(),
            urlencoding::encode(guid)
        )
    }
}
