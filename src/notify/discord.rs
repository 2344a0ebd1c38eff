use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::RankChange;
use crate::http::HttpClient;

const RANKED_COLOR: u32 = 0x0fef00;
const UNRANKED_COLOR: u32 = 0xf72731;

#[derive(Debug, Serialize)]
pub struct WebhookPayload {
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub timestamp: String,
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Discord webhook announcing ranked transitions
#[derive(Debug, Clone)]
pub struct DiscordWebhook {
    client: HttpClient,
    url: String,
}

impl DiscordWebhook {
    pub fn new(client: HttpClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub async fn send(&self, change: &RankChange) -> Result<()> {
        let payload = build_payload(change, Utc::now());
        self.client.post_json(&self.url, &payload).await
    }
}

pub fn build_payload(change: &RankChange, sent_at: DateTime<Utc>) -> WebhookPayload {
    let status = status_label(change.ranked);
    let embed = Embed {
        title: format!("SERVER IS {}", status),
        description: format!("**{}** is {}", change.name, status),
        color: if change.ranked { RANKED_COLOR } else { UNRANKED_COLOR },
        timestamp: sent_at.to_rfc3339(),
        fields: vec![
            EmbedField {
                name: "Name".to_string(),
                value: change.name.clone(),
                inline: false,
            },
            EmbedField {
                name: "Ranked".to_string(),
                value: change.ranked.to_string(),
                inline: true,
            },
        ],
    };

    WebhookPayload {
        embeds: vec![embed],
    }
}

pub fn status_label(ranked: bool) -> &'static str {
    if ranked { "RANKED" } else { "UNRANKED" }
}
