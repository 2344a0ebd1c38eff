use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Envelope of the Battlelog server profile (`?json=1`) response
#[derive(Debug, Deserialize)]
pub struct ProfileEnvelope {
    #[serde(rename = "type")]
    pub status: String,
    #[serde(default)]
    pub message: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ProfileMessage {
    pub server_info: ServerInfo,
    pub server_players: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    pub name: String,
    /// Keyed by slot category: "1" is the queue, "2" the team slots
    pub slots: BTreeMap<String, SlotInfo>,
    pub server_type: i64,
}

#[derive(Debug, Deserialize)]
pub struct SlotInfo {
    pub current: i64,
    #[serde(default)]
    pub max: i64,
}
