pub mod keeper_client;
pub mod models;
pub mod parsers;
pub mod profile_client;

pub use keeper_client::KeeperClient;
pub use profile_client::ProfileClient;
