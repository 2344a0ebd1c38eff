pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod notify;
pub mod services;
pub mod store;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use log::info;

use crate::config::{AppConfig, MonitorSettings};
use crate::services::Gatherer;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_monitor(cli: &Cli) -> Result<()> {
    let settings = MonitorSettings::new(
        cli.guid.clone(),
        &cli.game,
        cli.interval,
        cli.csv_file.clone(),
        cli.webhook.clone(),
    )?;
    let config = AppConfig::new();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let gatherer = Gatherer::new(settings, &config)?;
        tokio::select! {
            _ = gatherer.run() => {}
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl-C")?;
                info!("Interrupted, stopping monitor");
            }
        }
        Ok::<(), anyhow::Error>(())
    })
}
