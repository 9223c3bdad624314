//! # yahtzee-engine
//!
//! Rules, scoring and the turn state machine for a multi-player
//! Yahtzee-style dice game.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness**: every roll goes through a [`RollSource`].
//!    Seeded games are reproducible and tests script exact faces.
//!
//! 2. **Collaborator, not console**: the engine never reads input or prints.
//!    A [`Collaborator`] answers its questions and receives its events.
//!
//! 3. **Errors are values**: quitting is a [`TurnOutcome`], rule violations
//!    are [`YahtzeeError`]s. Nothing in the library exits the process.
//!
//! ## Modules
//!
//! - `core`: players, seats, configuration, RNG
//! - `dice`: dice, dice sets and combination predicates
//! - `scoring`: categories, the scoring function, scoreboards
//! - `rules`: category legality, results, leaderboard
//! - `game`: turn state machine, game loop, events

pub mod core;
pub mod dice;
pub mod error;
pub mod game;
pub mod rules;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameRng, GameRngState, Player, PlayerId, PlayerMap, RollSource,
    ScriptedRolls, ROUNDS,
};

pub use crate::dice::{DiceSet, Die, FaceCounts};

pub use crate::scoring::{score, Category, Scoreboard};

pub use crate::rules::{can_play, leaderboard, GameResult, Standing};

pub use crate::game::{
    Collaborator, EventLog, Game, GameEvent, GameOutcome, Turn, TurnAction, TurnOutcome,
    TurnPhase, TurnSummary,
};

pub use crate::error::{Result, YahtzeeError};
