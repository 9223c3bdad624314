//! One player's turn as an explicit state machine.
//!
//! ```text
//! InitialRoll -> Deciding -> CategoryCommit -> Finished
//!                  |  ^            |
//!                  +--+            +-> BonusYahtzeeResolution -> Finished
//! ```
//!
//! `Deciding` loops over action batches until the player keeps or runs out
//! of re-rolls. `CategoryCommit` loops until a playable category is chosen
//! and, for zero scores, confirmed. A `Quit` action ends the turn at once
//! with [`TurnOutcome::Quit`].

use smallvec::SmallVec;

use crate::core::{Player, PlayerId, RollSource, REROLLS_PER_TURN};
use crate::dice::DiceSet;
use crate::error::{Result, YahtzeeError};
use crate::rules::{can_play, playable};
use crate::scoring::{score, Category};

use super::action::TurnAction;
use super::collaborator::Collaborator;
use super::event::{EventLog, GameEvent};

/// Phase of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// Roll every die once, then hold them all.
    InitialRoll,
    /// Apply hold/re-roll batches.
    Deciding,
    /// Pick and commit a category.
    CategoryCommit,
    /// Fill the extra box a repeat Yahtzee earns.
    BonusYahtzeeResolution,
    Finished,
}

/// What a completed turn committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnSummary {
    pub player: PlayerId,
    /// Final dice.
    pub faces: Vec<u8>,
    pub category: Category,
    pub score: i32,
    /// Extra box filled by the bonus-Yahtzee cascade.
    pub bonus_fill: Option<(Category, i32)>,
}

/// How a turn ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Completed(TurnSummary),
    /// The player quit; nothing was committed.
    Quit,
}

enum Flow {
    Continue,
    Quit,
}

/// A turn in progress for one player.
pub struct Turn<'a, R: RollSource + ?Sized, C: Collaborator + ?Sized> {
    player: &'a mut Player,
    rng: &'a mut R,
    input: &'a mut C,
    log: &'a mut EventLog,
    phase: TurnPhase,
    dice: DiceSet,
    rerolls_remaining: u8,
    committed: Option<(Category, i32)>,
    bonus_fill: Option<(Category, i32)>,
    /// Zero-score categories the player already turned down this turn.
    declined: SmallVec<[Category; 4]>,
}

impl<'a, R: RollSource + ?Sized, C: Collaborator + ?Sized> Turn<'a, R, C> {
    /// Set up a turn with a fresh standard dice set.
    pub fn new(
        player: &'a mut Player,
        rng: &'a mut R,
        input: &'a mut C,
        log: &'a mut EventLog,
    ) -> Result<Self> {
        let dice = DiceSet::standard(&mut *rng)?;
        Ok(Self {
            player,
            rng,
            input,
            log,
            phase: TurnPhase::InitialRoll,
            dice,
            rerolls_remaining: REROLLS_PER_TURN,
            committed: None,
            bonus_fill: None,
            declined: SmallVec::new(),
        })
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    #[must_use]
    pub fn rerolls_remaining(&self) -> u8 {
        self.rerolls_remaining
    }

    /// Drive the turn to completion.
    pub fn run(mut self) -> Result<TurnOutcome> {
        loop {
            match self.phase {
                TurnPhase::InitialRoll => self.initial_roll(),
                TurnPhase::Deciding => {
                    if let Flow::Quit = self.decide()? {
                        return Ok(TurnOutcome::Quit);
                    }
                }
                TurnPhase::CategoryCommit => self.commit_category()?,
                TurnPhase::BonusYahtzeeResolution => self.resolve_bonus_yahtzee()?,
                TurnPhase::Finished => return self.summary().map(TurnOutcome::Completed),
            }
        }
    }

    fn initial_roll(&mut self) {
        self.dice.set_held_all(false);
        self.dice.roll_all(&mut *self.rng);
        self.dice.set_held_all(true);
        self.emit_roll();
        self.phase = TurnPhase::Deciding;
    }

    /// One batch of actions.
    fn decide(&mut self) -> Result<Flow> {
        let actions = self.input.request_actions(self.player, &self.dice);
        let mut stop = None;

        for action in actions {
            if action.is_terminal() {
                stop = Some(action);
                break;
            }
            match action {
                TurnAction::Reroll => self.reroll(),
                TurnAction::SelectAll => self.dice.set_held_all(false),
                TurnAction::Hold(index) => self.dice.toggle_held(index)?,
                TurnAction::Keep | TurnAction::Quit => {}
            }
        }

        if stop == Some(TurnAction::Quit) {
            self.emit(GameEvent::PlayerQuit {
                player: self.player.id(),
            });
            return Ok(Flow::Quit);
        }
        if stop.is_some() || self.rerolls_remaining == 0 {
            self.phase = TurnPhase::CategoryCommit;
        }
        Ok(Flow::Continue)
    }

    fn reroll(&mut self) {
        let player = self.player.id();
        if !self.dice.any_unheld() {
            self.emit(GameEvent::NoDiceSelected { player });
        } else if self.rerolls_remaining == 0 {
            self.emit(GameEvent::OutOfRerolls { player });
        } else {
            self.rerolls_remaining -= 1;
            self.dice.roll_all(&mut *self.rng);
            self.emit_roll();
        }
        // a further re-roll needs a fresh selection
        self.dice.set_held_all(true);
    }

    fn commit_category(&mut self) -> Result<()> {
        if playable(self.player, &self.dice, &Category::ALL).is_empty() {
            return Err(YahtzeeError::InvalidState {
                msg: format!("{} has no playable category left", self.player.name()),
            });
        }
        let category = self.choose(&Category::ALL, false);
        let is_bonus_yahtzee = self.player.had_yahtzee() && category == Category::Yahtzee;
        let value = score(category, &self.player.scoreboard, &self.dice, is_bonus_yahtzee);

        if value == 0
            && !self.declined.contains(&category)
            && !self.input.confirm_zero_score(category, value)
        {
            self.declined.push(category);
            self.emit(GameEvent::ZeroScoreDeclined {
                player: self.player.id(),
                category,
            });
            return Ok(());
        }

        self.player.scoreboard.commit(category, value)?;
        self.committed = Some((category, value));

        let player = self.player.id();
        if is_bonus_yahtzee {
            self.emit(GameEvent::BonusYahtzee {
                player,
                score: value,
            });
            self.phase = TurnPhase::BonusYahtzeeResolution;
        } else {
            self.emit(GameEvent::ScoreCommitted {
                player,
                category,
                score: value,
            });
            self.phase = TurnPhase::Finished;
        }
        Ok(())
    }

    /// Fill one more box after a bonus Yahtzee, by fixed priority: the
    /// matching upper box, then a kind box, then a combo at full value, then
    /// any upper box for zero.
    fn resolve_bonus_yahtzee(&mut self) -> Result<()> {
        let matching = self
            .dice
            .get(0)
            .and_then(|die| Category::from_upper_face(die.face()));

        if let Some(upper) = matching.filter(|&c| can_play(self.player, c, &self.dice)) {
            let value = score(upper, &self.player.scoreboard, &self.dice, true);
            self.player.scoreboard.commit(upper, value)?;
            self.emit(GameEvent::AutoFilled {
                player: self.player.id(),
                category: upper,
                score: value,
            });
            return self.finish_bonus(upper, value);
        }

        for group in [&Category::KINDS[..], &Category::COMBOS[..], &Category::UPPER[..]] {
            if playable(self.player, &self.dice, group).is_empty() {
                continue;
            }
            let category = self.choose(group, true);
            let value = score(category, &self.player.scoreboard, &self.dice, true);
            self.player.scoreboard.commit(category, value)?;
            self.emit(GameEvent::ScoreCommitted {
                player: self.player.id(),
                category,
                score: value,
            });
            return self.finish_bonus(category, value);
        }

        Err(YahtzeeError::BonusYahtzeeExhausted)
    }

    fn finish_bonus(&mut self, category: Category, value: i32) -> Result<()> {
        self.bonus_fill = Some((category, value));
        self.phase = TurnPhase::Finished;
        Ok(())
    }

    /// Ask until the answer is one of `offered` and playable.
    ///
    /// Callers check that at least one offered category is playable.
    fn choose(&mut self, offered: &[Category], is_bonus_yahtzee: bool) -> Category {
        loop {
            let category =
                self.input
                    .request_category(self.player, &self.dice, offered, is_bonus_yahtzee);
            if offered.contains(&category) && can_play(self.player, category, &self.dice) {
                return category;
            }
            self.emit(GameEvent::CategoryRejected {
                player: self.player.id(),
                category,
            });
        }
    }

    fn summary(&self) -> Result<TurnSummary> {
        let (category, score) = self.committed.ok_or_else(|| YahtzeeError::InvalidState {
            msg: "turn finished without a committed category".to_string(),
        })?;
        Ok(TurnSummary {
            player: self.player.id(),
            faces: self.dice.faces().to_vec(),
            category,
            score,
            bonus_fill: self.bonus_fill,
        })
    }

    fn emit_roll(&mut self) {
        self.emit(GameEvent::DiceRolled {
            player: self.player.id(),
            faces: self.dice.faces().to_vec(),
            rerolls_remaining: self.rerolls_remaining,
        });
    }

    fn emit(&mut self, event: GameEvent) {
        self.input.notify(&event);
        self.log.push(event);
    }
}
