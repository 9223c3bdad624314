//! Shared collaborators and dice helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use yahtzee_engine::rules::playable;
use yahtzee_engine::{Category, Collaborator, DiceSet, GameEvent, Player, TurnAction};

/// Replays canned answers, falling back to Keep, the first playable
/// category and accepting zero scores.
#[derive(Default)]
pub struct Script {
    pub batches: VecDeque<Vec<TurnAction>>,
    pub categories: VecDeque<Category>,
    pub confirms: VecDeque<bool>,
    /// Every category request as `(available, is_bonus_yahtzee)`.
    pub offers: Vec<(Vec<Category>, bool)>,
    pub zero_prompts: usize,
    pub events: Vec<GameEvent>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            categories: categories.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn count_events(&self, matches: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| matches(e)).count()
    }
}

impl Collaborator for Script {
    fn request_actions(&mut self, _: &Player, _: &DiceSet) -> Vec<TurnAction> {
        self.batches
            .pop_front()
            .unwrap_or_else(|| vec![TurnAction::Keep])
    }

    fn request_category(
        &mut self,
        player: &Player,
        dice: &DiceSet,
        available: &[Category],
        is_bonus_yahtzee: bool,
    ) -> Category {
        self.offers.push((available.to_vec(), is_bonus_yahtzee));
        self.categories.pop_front().unwrap_or_else(|| {
            playable(player, dice, available)
                .first()
                .copied()
                .unwrap_or(Category::Chance)
        })
    }

    fn confirm_zero_score(&mut self, _: Category, _: i32) -> bool {
        self.zero_prompts += 1;
        self.confirms.pop_front().unwrap_or(true)
    }

    fn notify(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

/// Dice draws for a turn that keeps its first roll: five faces for the new
/// dice set, then the initial roll.
pub fn opening(faces: [u8; 5]) -> Vec<u8> {
    let mut rolls = vec![1; 5];
    rolls.extend(faces);
    rolls
}

/// A player holding a scored Yahtzee plus the given boxes.
pub fn yahtzee_holder(filled: &[(Category, i32)]) -> Player {
    let mut player = Player::new(yahtzee_engine::PlayerId::new(0), "Ada");
    player.scoreboard.commit(Category::Yahtzee, 50).unwrap();
    for &(category, value) in filled {
        player.scoreboard.commit(category, value).unwrap();
    }
    player
}
