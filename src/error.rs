//! Engine error type.
//!
//! Only integration or logic faults surface as errors. Player mistakes
//! (illegal category choice, re-roll with nothing selected) are handled
//! inside the turn loop and reported as events instead.

use thiserror::Error;

use crate::scoring::Category;

/// Errors raised by the rules engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum YahtzeeError {
    /// A die index outside the dice set was toggled.
    #[error("die index {index} out of range for {len} dice")]
    IndexOutOfRange { index: usize, len: usize },

    /// A die or dice composition that cannot exist.
    #[error("invalid die: {msg}")]
    InvalidDie { msg: &'static str },

    /// The engine reached a state its own legality checks should prevent.
    #[error("invalid state: {msg}")]
    InvalidState { msg: String },

    /// The bonus-Yahtzee fallback chain found no open category.
    #[error("no open category left to fill for the bonus Yahtzee")]
    BonusYahtzeeExhausted,
}

impl YahtzeeError {
    pub(crate) fn already_played(category: Category) -> Self {
        YahtzeeError::InvalidState {
            msg: format!("category {category} has already been played"),
        }
    }
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, YahtzeeError>;
