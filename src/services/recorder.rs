use anyhow::Result;
use chrono::{Local, SubsecRound};
use log::info;

use crate::domain::{Game, LogRecord, SharedSnapshot};
use crate::store::CsvLog;

/// Writes each tick's figures to the console log and the CSV log
pub struct Recorder {
    log: CsvLog,
    game: Game,
}

impl Recorder {
    pub fn new(log: CsvLog, game: Game) -> Self {
        Self { log, game }
    }

    pub async fn record(&self, state: &SharedSnapshot) -> Result<LogRecord> {
        let reading = state.lock().await.reading();

        let now = Local::now().naive_local().trunc_subsecs(0);
        let record = LogRecord::new(&reading, self.game, now);

        info!("{}", record.summary());
        self.log.append(&record)?;
        Ok(record)
    }
}
