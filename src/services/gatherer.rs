use anyhow::Result;
use log::{error, info, warn};
use tokio::time::sleep;

use crate::api::{KeeperClient, ProfileClient};
use crate::config::{AppConfig, MonitorSettings};
use crate::domain::{LogRecord, ProfileReading, ServerSnapshot, SharedSnapshot, SnapshotReading};
use crate::http::HttpClient;
use crate::notify::DiscordWebhook;
use crate::services::announcer::RankAnnouncer;
use crate::services::recorder::Recorder;
use crate::store::CsvLog;

/// Polls Battlelog for one server and reconciles its player counts.
///
/// The collection loop and the optional announcement loop share one
/// [`SharedSnapshot`]; every read or write of it happens under its lock and the
/// lock is never held across a request or a file write.
pub struct Gatherer {
    settings: MonitorSettings,
    state: SharedSnapshot,
    keeper: KeeperClient,
    profile: ProfileClient,
    recorder: Recorder,
    announcer: Option<RankAnnouncer>,
}

impl Gatherer {
    pub fn new(settings: MonitorSettings, config: &AppConfig) -> Result<Self> {
        let client = HttpClient::new(&config.http)?;
        let endpoints = &config.endpoints;

        let keeper = KeeperClient::new(client.clone(), &endpoints.keeper_base_url, &settings.guid);
        let profile = ProfileClient::new(
            client.clone(),
            &endpoints.profile_base_url,
            settings.game,
            &settings.guid,
        );
        let recorder = Recorder::new(CsvLog::new(&settings.csv_file), settings.game);
        let announcer = settings
            .webhook
            .as_deref()
            .map(|url| RankAnnouncer::new(DiscordWebhook::new(client.clone(), url)));

        Ok(Self {
            settings,
            state: ServerSnapshot::shared(),
            keeper,
            profile,
            recorder,
            announcer,
        })
    }

    pub fn settings(&self) -> &MonitorSettings {
        &self.settings
    }

    pub fn state(&self) -> SharedSnapshot {
        self.state.clone()
    }

    pub async fn snapshot(&self) -> SnapshotReading {
        self.state.lock().await.reading()
    }

    /// Refresh the keeper player count; 0 when unsupported or unreachable
    pub async fn refresh_keeper_count(&self) -> i64 {
        let count = if self.settings.game.supports_keeper() {
            self.fetch_keeper_count().await
        } else {
            0
        };

        self.state.lock().await.set_keeper_count(count);
        count
    }

    /// Refresh the profile figures; `None` when the profile was unavailable
    pub async fn refresh_profile(&self) -> Option<ProfileReading> {
        let reading = match self.profile.fetch_profile().await {
            Ok(reading) => Some(reading),
            Err(e) => {
                warn!(
                    "Profile request: Server with guid {} is offline: {:#}",
                    self.settings.guid, e
                );
                None
            }
        };

        self.state.lock().await.apply_profile(reading.clone());
        reading
    }

    /// One snapshot tick: keeper, profile, then record
    pub async fn collect_once(&self) -> Option<LogRecord> {
        self.refresh_keeper_count().await;
        self.refresh_profile().await;

        match self.recorder.record(&self.state).await {
            Ok(record) => Some(record),
            Err(e) => {
                error!("Failed to record results: {:#}", e);
                None
            }
        }
    }

    /// Check for a ranked transition; always `false` without a webhook
    pub async fn announce_once(&self) -> bool {
        match &self.announcer {
            Some(announcer) => announcer.check(&self.state).await,
            None => false,
        }
    }

    /// Run the collection loop, and the announcement loop if a webhook is set
    pub async fn run(&self) {
        info!(
            "Monitoring {} server {} every {}s, logging to {}",
            self.settings.game,
            self.settings.guid,
            self.settings.interval.as_secs(),
            self.settings.csv_file.display()
        );

        if self.announcer.is_some() {
            tokio::join!(self.collection_loop(), self.announcement_loop());
        } else {
            self.collection_loop().await;
        }
    }

    async fn fetch_keeper_count(&self) -> i64 {
        match self.keeper.fetch_player_count().await {
            Ok(count) => count,
            Err(e) => {
                warn!(
                    "Keeper request: Server with guid {} is offline: {:#}",
                    self.settings.guid, e
                );
                0
            }
        }
    }

    async fn collection_loop(&self) {
        loop {
            self.collect_once().await;
            sleep(self.settings.interval).await;
        }
    }

    async fn announcement_loop(&self) {
        loop {
            self.announce_once().await;
            sleep(self.settings.announce_interval()).await;
        }
    }
}
