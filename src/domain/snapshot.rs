use std::sync::Arc;
use tokio::sync::Mutex;

/// Count written when a source could not be read this tick
pub const UNAVAILABLE_COUNT: i64 = -1;
/// Name written when the profile could not be read this tick
pub const UNAVAILABLE_NAME: &str = "N/A";
const UNKNOWN_NAME: &str = "Unknown";

/// The snapshot shared between the collection and announcement loops
pub type SharedSnapshot = Arc<Mutex<ServerSnapshot>>;

/// Figures extracted from a successful server profile response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileReading {
    pub name: String,
    pub player_count: i64,
    pub max_slots: i64,
    pub queue: i64,
    pub true_player_count: i64,
    pub ranked: bool,
}

/// Latest known state of the monitored server.
///
/// Every field is only touched while holding the [`SharedSnapshot`] lock.
/// `ranked_announced` tracks the ranked value the announcer last reported, so a
/// change is detected by comparing the two.
#[derive(Debug, Clone)]
pub struct ServerSnapshot {
    name: String,
    player_count: i64,
    keeper_count: i64,
    true_player_count: i64,
    max_slots: i64,
    queue: i64,
    ranked: Option<bool>,
    ranked_announced: Option<bool>,
}

/// Consistent copy of a [`ServerSnapshot`], taken under the lock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotReading {
    pub name: String,
    pub player_count: i64,
    pub keeper_count: i64,
    pub true_player_count: i64,
    pub max_slots: i64,
    pub queue: i64,
    pub ranked: Option<bool>,
}

/// A ranked transition the announcer has claimed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankChange {
    pub name: String,
    pub ranked: bool,
}

impl Default for ServerSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerSnapshot {
    pub fn new() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            player_count: 0,
            keeper_count: 0,
            true_player_count: 0,
            max_slots: 0,
            queue: 0,
            ranked: None,
            ranked_announced: None,
        }
    }

    pub fn shared() -> SharedSnapshot {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn set_keeper_count(&mut self, count: i64) {
        self.keeper_count = count;
    }

    /// Commit the outcome of one profile fetch.
    ///
    /// `None` means the profile was unavailable: counts become
    /// [`UNAVAILABLE_COUNT`], the name [`UNAVAILABLE_NAME`], and `ranked` keeps
    /// its previous value.
    pub fn apply_profile(&mut self, reading: Option<ProfileReading>) {
        match reading {
            Some(reading) => {
                self.name = reading.name;
                self.player_count = reading.player_count;
                self.max_slots = reading.max_slots;
                self.queue = reading.queue;
                self.true_player_count = reading.true_player_count;
                self.ranked = Some(reading.ranked);
            }
            None => {
                self.name = UNAVAILABLE_NAME.to_string();
                self.player_count = UNAVAILABLE_COUNT;
                self.max_slots = UNAVAILABLE_COUNT;
                self.queue = UNAVAILABLE_COUNT;
                self.true_player_count = UNAVAILABLE_COUNT;
            }
        }

        if self.ranked_announced.is_none() {
            self.ranked_announced = self.ranked;
        }
    }

    pub fn reading(&self) -> SnapshotReading {
        SnapshotReading {
            name: self.name.clone(),
            player_count: self.player_count,
            keeper_count: self.keeper_count,
            true_player_count: self.true_player_count,
            max_slots: self.max_slots,
            queue: self.queue,
            ranked: self.ranked,
        }
    }

    /// Claim a pending ranked transition, marking it as announced
    pub fn take_rank_change(&mut self) -> Option<RankChange> {
        if self.ranked == self.ranked_announced {
            return None;
        }
        self.ranked_announced = self.ranked;

        self.ranked.map(|ranked| RankChange {
            name: self.name.clone(),
            ranked,
        })
    }
}

impl SnapshotReading {
    pub fn diff_keeper(&self) -> i64 {
        self.keeper_count - self.player_count
    }

    pub fn diff_profile(&self) -> i64 {
        self.true_player_count - self.player_count
    }
}
