pub mod announcer;
pub mod gatherer;
pub mod recorder;

pub use announcer::RankAnnouncer;
pub use gatherer::Gatherer;
pub use recorder::Recorder;
