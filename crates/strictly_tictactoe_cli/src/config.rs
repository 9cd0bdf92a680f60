//! Play configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::{Difficulty, Player};
use tracing::{debug, info, instrument};

/// Settings for an interactive game.
///
/// Every field is optional in the file; missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// AI strength.
    #[serde(default)]
    difficulty: Difficulty,

    /// Mark the human plays. X moves first.
    #[serde(default = "default_human")]
    human: Player,

    /// Pause before the AI replies, in milliseconds.
    #[serde(default = "default_thinking_delay_ms")]
    thinking_delay_ms: u64,

    /// Fixed RNG seed for reproducible games.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_human() -> Player {
    Player::X
}

fn default_thinking_delay_ms() -> u64 {
    500
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            human: default_human(),
            thinking_delay_ms: default_thinking_delay_ms(),
            seed: None,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            difficulty = %config.difficulty,
            human = %config.human,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Replaces the difficulty when `difficulty` is set.
    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        self
    }

    /// Replaces the human mark when `human` is set.
    pub fn with_human(mut self, human: Option<Player>) -> Self {
        if let Some(human) = human {
            self.human = human;
        }
        self
    }

    /// Replaces the thinking delay when `delay_ms` is set.
    pub fn with_thinking_delay_ms(mut self, delay_ms: Option<u64>) -> Self {
        if let Some(delay_ms) = delay_ms {
            self.thinking_delay_ms = delay_ms;
        }
        self
    }

    /// Replaces the seed when `seed` is set.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
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
    /// Creates a new configuration error.
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
