//! Core building blocks: seats, players, configuration and dice randomness.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{
    ConfigError, DiceSpec, GameConfig, DICE_COUNT, DICE_SIDES, MAX_PLAYERS, MAX_PLAYER_NAME,
    MIN_PLAYERS, REROLLS_PER_TURN, ROUNDS, STANDARD_DICE,
};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState, RollSource, ScriptedRolls};
