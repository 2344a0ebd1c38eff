use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::api::models::{ProfileEnvelope, ProfileMessage, SlotInfo};
use crate::domain::ProfileReading;
use crate::errors::parse_context;

const SUCCESS_TYPE: &str = "success";
const QUEUE_SLOTS: &str = "1";
const TEAM_SLOTS: &str = "2";
/// Battlelog `serverType` of unranked servers
const UNRANKED_SERVER_TYPE: i64 = 4;

/// Parse a server profile response into a [`ProfileReading`].
///
/// Fails when the envelope does not report success or a field is missing.
pub fn parse_profile(data: Value) -> Result<ProfileReading> {
    let envelope: ProfileEnvelope =
        serde_json::from_value(data).with_context(|| parse_context("profile envelope"))?;

    if envelope.status != SUCCESS_TYPE {
        bail!("Profile request returned type '{}'", envelope.status);
    }

    let message: ProfileMessage = serde_json::from_value(envelope.message)
        .with_context(|| parse_context("profile message"))?;
    let info = message.server_info;

    let team = slot(&info.slots, TEAM_SLOTS)?;
    let queue = slot(&info.slots, QUEUE_SLOTS)?;

    Ok(ProfileReading {
        player_count: team.current,
        max_slots: team.max,
        queue: queue.current,
        true_player_count: message.server_players.len() as i64,
        ranked: is_ranked(info.server_type),
        name: info.name,
    })
}

pub fn is_ranked(server_type: i64) -> bool {
    server_type != UNRANKED_SERVER_TYPE
}

fn slot<'a>(slots: &'a BTreeMap<String, SlotInfo>, category: &str) -> Result<&'a SlotInfo> {
    slots
        .get(category)
        .with_context(|| format!("Profile is missing slot category {}", category))
}
