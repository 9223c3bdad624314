//! Player actions during the rolling phase of a turn.

use serde::{Deserialize, Serialize};

/// One step of a player's rolling decision.
///
/// Actions arrive in batches and are applied in order. A `Keep` ends the
/// batch: anything queued after it is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    /// Toggle whether the die at this 0-based index is held.
    Hold(usize),
    /// Release every die for the next re-roll.
    SelectAll,
    /// Re-roll the released dice.
    Reroll,
    /// Stop rolling and choose a category.
    Keep,
    /// Abandon the game.
    Quit,
}

impl TurnAction {
    /// True for actions that end the rolling phase on their own.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnAction::Keep | TurnAction::Quit)
    }
}
