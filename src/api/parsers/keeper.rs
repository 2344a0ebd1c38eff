use serde_json::Value;

/// Sum the roster sizes of every team in a keeper snapshot.
///
/// Returns `None` when the snapshot or a team roster is missing.
pub fn count_team_players(data: &Value) -> Option<i64> {
    let teams = data.get("snapshot")?.get("teamInfo")?.as_object()?;

    teams
        .values()
        .map(|team| roster_size(team.get("players")?))
        .sum()
}

/// Rosters come either as a list or as an object keyed by persona id
fn roster_size(players: &Value) -> Option<i64> {
    match players {
        Value::Array(list) => Some(list.len() as i64),
        Value::Object(map) => Some(map.len() as i64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sums_team_rosters() {
        let data = json!({
            "snapshot": {
                "teamInfo": {
                    "1": { "players": [1, 2, 3, 4, 5] },
                    "2": { "players": [6, 7, 8] }
                }
            }
        });
        assert_eq!(count_team_players(&data), Some(8));
    }

    #[test]
    fn test_rosters_keyed_by_persona() {
        let data = json!({
            "snapshot": {
                "teamInfo": {
                    "0": { "players": {} },
                    "1": { "players": { "111": {}, "222": {} } },
                    "2": { "players": { "333": {} } }
                }
            }
        });
        assert_eq!(count_team_players(&data), Some(3));
    }

    #[test]
    fn test_offline_server_has_no_snapshot() {
        assert_eq!(count_team_players(&json!({ "lastUpdated": 0 })), None);
        assert_eq!(count_team_players(&json!({ "snapshot": null })), None);
    }

    #[test]
    fn test_team_without_roster_is_malformed() {
        let data = json!({ "snapshot": { "teamInfo": { "1": { "faction": 0 } } } });
        assert_eq!(count_team_players(&data), None);
    }
}
