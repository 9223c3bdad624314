//! The interface between the engine and whoever makes the decisions.
//!
//! A front end (terminal, GUI, bot, test script) implements [`Collaborator`].
//! The engine only ever blocks inside these calls; input validation beyond
//! category legality is the collaborator's job.

use crate::core::Player;
use crate::dice::DiceSet;
use crate::scoring::Category;

use super::action::TurnAction;
use super::event::GameEvent;

/// Decision maker and event sink for a game.
pub trait Collaborator {
    /// Next batch of rolling actions for `player`, applied in order.
    fn request_actions(&mut self, player: &Player, dice: &DiceSet) -> Vec<TurnAction>;

    /// A category from `available` for the current dice.
    ///
    /// Called again until the answer is playable. `is_bonus_yahtzee` is set
    /// while the bonus-Yahtzee cascade asks for its extra box.
    fn request_category(
        &mut self,
        player: &Player,
        dice: &DiceSet,
        available: &[Category],
        is_bonus_yahtzee: bool,
    ) -> Category;

    /// Whether to really fill `category` with `score` (always 0 today).
    fn confirm_zero_score(&mut self, category: Category, score: i32) -> bool;

    /// Informational event. No effect on control flow.
    fn notify(&mut self, event: &GameEvent) {
        let _ = event;
    }
}

impl<C: Collaborator + ?Sized> Collaborator for &mut C {
    fn request_actions(&mut self, player: &Player, dice: &DiceSet) -> Vec<TurnAction> {
        (**self).request_actions(player, dice)
    }

    fn request_category(
        &mut self,
        player: &Player,
        dice: &DiceSet,
        available: &[Category],
        is_bonus_yahtzee: bool,
    ) -> Category {
        (**self).request_category(player, dice, available, is_bonus_yahtzee)
    }

    fn confirm_zero_score(&mut self, category: Category, score: i32) -> bool {
        (**self).confirm_zero_score(category, score)
    }

    fn notify(&mut self, event: &GameEvent) {
        (**self).notify(event);
    }
}
