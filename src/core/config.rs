//! Game configuration and fixed rule constants.
//!
//! The rules themselves are not configurable: the round count, re-roll
//! allowance, dice composition and score constants are plain `const`s.
//! A `GameConfig` only says who is playing and which seed drives the dice.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rounds per game; one category is filled per round.
pub const ROUNDS: usize = 13;

/// Re-rolls allowed after the initial roll of a turn.
pub const REROLLS_PER_TURN: u8 = 2;

/// Dice per turn.
pub const DICE_COUNT: usize = 5;

/// Sides per die.
pub const DICE_SIDES: u8 = 6;

/// Inclusive bounds on player count.
pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 10;

/// Display width reserved for a player name.
pub const MAX_PLAYER_NAME: usize = 10;

/// A group of identical dice in a composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSpec {
    pub sides: u8,
    pub count: usize,
}

/// Five six-sided dice.
pub const STANDARD_DICE: [DiceSpec; 1] = [DiceSpec {
    sides: DICE_SIDES,
    count: DICE_COUNT,
}];

/// Configuration loading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("expected 1-10 players, got {0}")]
    PlayerCount(usize),
    #[error("player {0} has an empty name")]
    EmptyName(usize),
    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Who plays, and with which seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seat order is the turn order.
    pub player_names: Vec<String>,

    /// Seed for the game's dice stream.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_seed() -> u64 {
    42
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_names: Vec::new(),
            seed: default_seed(),
        }
    }
}

impl GameConfig {
    /// Create a config for the given players with the default seed.
    pub fn new<S: Into<String>>(player_names: impl IntoIterator<Item = S>) -> Self {
        Self {
            player_names: player_names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Add a player at the next seat.
    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>) -> Self {
        self.player_names.push(name.into());
        self
    }

    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check player count and names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let count = self.player_names.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(ConfigError::PlayerCount(count));
        }
        if let Some(seat) = self.player_names.iter().position(|n| n.trim().is_empty()) {
            return Err(ConfigError::EmptyName(seat + 1));
        }
        Ok(())
    }
}
