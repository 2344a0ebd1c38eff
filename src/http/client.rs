use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::config::HttpSettings;
use crate::errors::{fetch_context, parse_context};

/// Shared HTTP client; clones reuse the same connection pool
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(settings: &HttpSettings) -> Result<Self> {
        let client = Self::build_client(settings)?;
        Ok(Self { client })
    }

    /// GET a URL and decode the body as JSON regardless of status code
    pub async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self.send_get_request(url).await?;
        response
            .json::<Value>()
            .await
            .with_context(|| parse_context(url))
    }

    /// POST a JSON body, failing on a non-success status
    pub async fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> Result<()> {
        self.client
            .post(url)
            .json(body)
            .send()
            .await
            .with_context(|| fetch_context(url))?
            .error_for_status()
            .context("Server rejected POST request")?;
        Ok(())
    }

    fn build_client(settings: &HttpSettings) -> Result<Client> {
        let builder = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout_secs));
        let builder = if settings.use_env_proxy {
            builder
        } else {
            builder.no_proxy()
        };
        builder.build().context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        debug!("GET {}", url);
        self.client
            .get(url)
            .send()
            .await
            .with_context(|| fetch_context(url))
    }
}
