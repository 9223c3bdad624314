//! Rules shared by every turn: which categories are playable, and who won.
//!
//! - `can_play`: the category legality check the turn engine loops on
//! - `GameResult`: single winner or N-way tie
//! - `leaderboard`: standings for display

pub mod engine;

pub use engine::{can_play, leaderboard, playable, GameResult, Standing};
