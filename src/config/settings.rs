use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::Game;

pub const MIN_INTERVAL_SECS: i64 = 10;
pub const DEFAULT_INTERVAL_SECS: i64 = 20;
pub const ANNOUNCE_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_CSV_FILE: &str = "server_log.csv";

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Honour HTTP(S)_PROXY / NO_PROXY from the environment
    pub use_env_proxy: bool,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            user_agent: "BFPlayerDiffCheck".to_string(),
            timeout_secs: 10,
            use_env_proxy: true,
        }
    }
}

/// Base URLs of the two Battlelog sources
#[derive(Debug, Clone)]
pub struct EndpointSettings {
    pub profile_base_url: String,
    pub keeper_base_url: String,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            profile_base_url: "http://battlelog.battlefield.com".to_string(),
            keeper_base_url: "https://keeper.battlelog.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub http: HttpSettings,
    pub endpoints: EndpointSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Validated settings for monitoring a single server
#[derive(Debug, Clone)]
pub struct MonitorSettings {
    pub guid: String,
    pub game: Game,
    pub interval: Duration,
    pub csv_file: PathBuf,
    pub webhook: Option<String>,
}

impl MonitorSettings {
    /// Fails for games Battlelog monitoring does not support.
    /// Intervals below [`MIN_INTERVAL_SECS`] are raised to it.
    pub fn new(
        guid: impl Into<String>,
        game: &str,
        interval_secs: i64,
        csv_file: impl Into<PathBuf>,
        webhook: Option<String>,
    ) -> Result<Self> {
        let game = game.parse::<Game>()?;

        Ok(Self {
            guid: guid.into(),
            game,
            interval: clamp_interval(interval_secs),
            csv_file: csv_file.into(),
            webhook: webhook.filter(|url| !url.trim().is_empty()),
        })
    }

    pub fn announce_interval(&self) -> Duration {
        Duration::from_secs(ANNOUNCE_INTERVAL_SECS)
    }
}

fn clamp_interval(interval_secs: i64) -> Duration {
    Duration::from_secs(interval_secs.max(MIN_INTERVAL_SECS) as u64)
}
