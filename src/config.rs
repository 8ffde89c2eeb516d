//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_dots::{GridSize, PlayerRole, Strategy};
use tracing::{debug, info, instrument};

/// Largest supported grid; row and column labels stop fitting beyond this.
pub const MAX_GRID_SIZE: usize = 26;

/// Who sits in each seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two people share the terminal.
    #[serde(alias = "hh")]
    #[strum(to_string = "human-vs-human", serialize = "hh")]
    HumanVsHuman,

    /// Player 1 is a person, player 2 is the computer.
    #[default]
    #[serde(alias = "ha")]
    #[strum(to_string = "human-vs-ai", serialize = "ha")]
    HumanVsAi,

    /// The computer plays both seats.
    #[serde(alias = "aa")]
    #[strum(to_string = "ai-vs-ai", serialize = "aa")]
    AiVsAi,
}

impl GameMode {
    /// Seat roles for player 1 and player 2.
    pub fn roles(self) -> [PlayerRole; 2] {
        match self {
            GameMode::HumanVsHuman => [PlayerRole::Human, PlayerRole::Human],
            GameMode::HumanVsAi => [PlayerRole::Human, PlayerRole::Ai],
            GameMode::AiVsAi => [PlayerRole::Ai, PlayerRole::Ai],
        }
    }
}

/// Settings for a session of play.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Dots per side.
    #[serde(default = "default_grid_size")]
    grid_size: usize,

    /// Seat assignment.
    #[serde(default)]
    mode: GameMode,

    /// Strategy used by every AI seat.
    #[serde(default)]
    strategy: Strategy,

    /// Fixed seed for the move selector; entropy when absent.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,

    /// Pause before each AI move, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Name override for player 1.
    #[serde(default)]
    #[setters(strip_option, into)]
    player_one_name: Option<String>,

    /// Name override for player 2.
    #[serde(default)]
    #[setters(strip_option, into)]
    player_two_name: Option<String>,
}

#[instrument]
fn default_grid_size() -> usize {
    6
}

#[instrument]
fn default_think_delay_ms() -> u64 {
    1000
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            mode: GameMode::default(),
            strategy: Strategy::default(),
            seed: None,
            think_delay_ms: default_think_delay_ms(),
            player_one_name: None,
            player_two_name: None,
        }
    }
}

impl GameConfig {
    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(grid_size = config.grid_size, mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text. Missing keys take
    /// their defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < GridSize::MIN || self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::new(format!(
                "grid_size must be between {} and {}, got {}",
                GridSize::MIN,
                MAX_GRID_SIZE,
                self.grid_size
            )));
        }
        for name in [&self.player_one_name, &self.player_two_name]
            .into_iter()
            .flatten()
        {
            if name.trim().is_empty() {
                return Err(ConfigError::new("player names must not be blank".to_string()));
            }
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.grid_size(), 6);
        assert_eq!(*config.mode(), GameMode::HumanVsAi);
        assert_eq!(*config.strategy(), Strategy::Greedy);
        assert_eq!(*config.think_delay_ms(), 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_matches_default() {
        assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());

        let partial = GameConfig::from_toml_str("think_delay_ms = 5").unwrap();
        assert_eq!(*partial.grid_size(), 6);
        assert_eq!(*partial.think_delay_ms(), 5);
    }

    #[test]
    fn test_mode_short_names() {
        assert_eq!(GameMode::from_str("hh"), Ok(GameMode::HumanVsHuman));
        assert_eq!(GameMode::from_str("HA"), Ok(GameMode::HumanVsAi));
        assert_eq!(GameMode::from_str("ai-vs-ai"), Ok(GameMode::AiVsAi));
        assert_eq!(GameMode::AiVsAi.roles(), [PlayerRole::Ai, PlayerRole::Ai]);
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
