use clap::Parser;
use std::path::PathBuf;

use crate::config::settings::{DEFAULT_CSV_FILE, DEFAULT_INTERVAL_SECS};

#[derive(Parser, Debug)]
#[command(
    author,
    about = "Logs the player counts of a Battlefield server to stdout and a CSV file",
    disable_version_flag = true
)]
pub struct Cli {
    /// Game version
    #[arg(short = 'v', long = "version", value_name = "GAME", value_parser = ["bf3", "bf4"], ignore_case = true)]
    pub game: String,

    /// Server GUID
    #[arg(short, long)]
    pub guid: String,

    /// Path to the CSV log
    #[arg(short = 'w', long, default_value = DEFAULT_CSV_FILE)]
    pub csv_file: PathBuf,

    /// Logging interval in seconds, minimum 10
    #[arg(short, long, default_value_t = DEFAULT_INTERVAL_SECS, allow_negative_numbers = true)]
    pub interval: i64,

    /// Discord webhook for ranked/unranked announcements
    #[arg(long)]
    pub webhook: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["bf-player-diff", "-v", "bf4", "-g", "abc"]).unwrap();
        assert_eq!(cli.game, "bf4");
        assert_eq!(cli.guid, "abc");
        assert_eq!(cli.csv_file, PathBuf::from("server_log.csv"));
        assert_eq!(cli.interval, 20);
        assert_eq!(cli.webhook, None);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "bf-player-diff",
            "--version",
            "bf3",
            "--guid",
            "abc",
            "--csv-file",
            "out.csv",
            "--interval",
            "5",
            "--webhook",
            "https://discord.test/hook",
        ])
        .unwrap();
        assert_eq!(cli.game, "bf3");
        assert_eq!(cli.csv_file, PathBuf::from("out.csv"));
        assert_eq!(cli.interval, 5);
        assert_eq!(cli.webhook.as_deref(), Some("https://discord.test/hook"));
    }

    #[test]
    fn test_unknown_game_is_rejected() {
        assert!(Cli::try_parse_from(["bf-player-diff", "-v", "bf1", "-g", "abc"]).is_err());
    }

    #[test]
    fn test_guid_is_required() {
        assert!(Cli::try_parse_from(["bf-player-diff", "-v", "bf4"]).is_err());
    }
}
