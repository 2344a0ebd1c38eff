use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::domain::{Game, SnapshotReading};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const UNSUPPORTED_MARK: &str = "?";

/// A keeper-derived figure, which BF3 servers cannot provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeeperMetric {
    Count(i64),
    Unsupported,
}

impl Serialize for KeeperMetric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            KeeperMetric::Count(value) => serializer.serialize_i64(*value),
            KeeperMetric::Unsupported => serializer.serialize_str(UNSUPPORTED_MARK),
        }
    }
}

impl fmt::Display for KeeperMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeeperMetric::Count(value) => write!(f, "{}", value),
            KeeperMetric::Unsupported => f.write_str(UNSUPPORTED_MARK),
        }
    }
}

/// One tick's reconciled figures; field order is the CSV column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    #[serde(serialize_with = "serialize_timestamp")]
    pub date_time: NaiveDateTime,
    pub players: i64,
    pub true_count_keeper: KeeperMetric,
    pub true_count_profile: i64,
    pub max_count: i64,
    pub queue: i64,
    pub diff_keeper: KeeperMetric,
    pub diff_profile: i64,
    pub ranked: Option<bool>,
}

impl LogRecord {
    pub fn new(reading: &SnapshotReading, game: Game, date_time: NaiveDateTime) -> Self {
        let (true_count_keeper, diff_keeper) = if game.supports_keeper() {
            (
                KeeperMetric::Count(reading.keeper_count),
                KeeperMetric::Count(reading.diff_keeper()),
            )
        } else {
            (KeeperMetric::Unsupported, KeeperMetric::Unsupported)
        };

        Self {
            date_time,
            players: reading.player_count,
            true_count_keeper,
            true_count_profile: reading.true_player_count,
            max_count: reading.max_slots,
            queue: reading.queue,
            diff_keeper,
            diff_profile: reading.diff_profile(),
            ranked: reading.ranked,
        }
    }

    pub fn timestamp(&self) -> String {
        self.date_time.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Console rendering of the record
    pub fn summary(&self) -> String {
        format!(
            "{} Players: {}, TrueCountKeeper: {}, TrueCountProfile: {}, MaxCount: {}, \
             Queue: {}, DiffKeeper: {}, DiffProfile: {}, Ranked: {}",
            self.timestamp(),
            self.players,
            self.true_count_keeper,
            self.true_count_profile,
            self.max_count,
            self.queue,
            self.diff_keeper,
            self.diff_profile,
            ranked_label(self.ranked),
        )
    }
}

fn ranked_label(ranked: Option<bool>) -> String {
    ranked.map_or_else(|| "unknown".to_string(), |value| value.to_string())
}

fn serialize_timestamp<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
}
