use anyhow::{Result, bail};
use std::fmt;
use std::str::FromStr;

/// Battlefield titles that Battlelog exposes server profiles for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Game {
    Bf3,
    Bf4,
}

impl Game {
    /// Path segment used by Battlelog URLs
    pub fn slug(self) -> &'static str {
        match self {
            Game::Bf3 => "bf3",
            Game::Bf4 => "bf4",
        }
    }

    /// Only BF4 servers publish keeper snapshots
    pub fn supports_keeper(self) -> bool {
        matches!(self, Game::Bf4)
    }
}

impl FromStr for Game {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "bf3" => Ok(Game::Bf3),
            "bf4" => Ok(Game::Bf4),
            _ => bail!("Unsupported game {}", value),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
