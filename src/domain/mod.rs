pub mod game;
pub mod record;
pub mod snapshot;

pub use game::Game;
pub use record::{KeeperMetric, LogRecord};
pub use snapshot::{
    ProfileReading, RankChange, ServerSnapshot, SharedSnapshot, SnapshotReading,
    UNAVAILABLE_COUNT, UNAVAILABLE_NAME,
};
