//! Whole-game driver: rounds, seats and the final result.

use crate::core::{ConfigError, GameConfig, GameRng, Player, PlayerId, PlayerMap, RollSource, ROUNDS};
use crate::error::Result;
use crate::rules::{leaderboard, GameResult, Standing};

use super::collaborator::Collaborator;
use super::event::{EventLog, GameEvent};
use super::turn::{Turn, TurnOutcome};

/// How a call to [`Game::play`] ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// Every round was played.
    Finished(GameResult),
    /// A player quit during their turn.
    Quit { player: PlayerId },
}

/// A game of `ROUNDS` rounds over a fixed set of seats.
///
/// ## Example
///
/// ```
/// use yahtzee_engine::core::ScriptedRolls;
/// use yahtzee_engine::Game;
///
/// let game = Game::new(["Ada", "Bo"], ScriptedRolls::new([6]));
/// assert_eq!(game.player_count(), 2);
/// assert_eq!(game.turns_remaining(), 26);
/// ```
pub struct Game<R: RollSource = GameRng> {
    players: PlayerMap<Player>,
    rng: R,
    history: EventLog,
    turns_played: usize,
}

impl Game<GameRng> {
    /// Build a seeded game from a validated config.
    pub fn from_config(config: &GameConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(&config.player_names, GameRng::new(config.seed)))
    }
}

impl<R: RollSource> Game<R> {
    /// Seat the named players in order.
    ///
    /// # Panics
    /// Panics with no players or more than 255.
    pub fn new<S: AsRef<str>>(names: impl IntoIterator<Item = S>, rng: R) -> Self {
        let names: Vec<String> = names.into_iter().map(|n| n.as_ref().to_string()).collect();
        let players = PlayerMap::new(names.len(), |id| Player::new(id, names[id.index()].clone()));
        Self {
            players,
            rng,
            history: EventLog::new(),
            turns_played: 0,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Every event emitted so far.
    #[must_use]
    pub fn history(&self) -> &EventLog {
        &self.history
    }

    /// The event history as newline-delimited JSON.
    pub fn history_ndjson(&self) -> std::result::Result<String, serde_json::Error> {
        self.history.to_ndjson()
    }

    /// Turns left before the game ends.
    #[must_use]
    pub fn turns_remaining(&self) -> usize {
        ROUNDS * self.player_count() - self.turns_played
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.turns_remaining() == 0
    }

    /// Seat due to play next, if any.
    #[must_use]
    pub fn next_player(&self) -> Option<PlayerId> {
        (!self.is_finished()).then(|| PlayerId::new((self.turns_played % self.player_count()) as u8))
    }

    /// Play the remaining turns round-robin, then settle the winner.
    ///
    /// A quit stops the game immediately; calling `play` again resumes with
    /// the quitting player's turn. A finished game just reports its result.
    pub fn play<C: Collaborator + ?Sized>(&mut self, input: &mut C) -> Result<GameOutcome> {
        if self.is_finished() {
            return Ok(GameOutcome::Finished(self.result()));
        }
        if self.turns_played == 0 {
            let players = self.players.iter().map(|(_, p)| p.name().to_string()).collect();
            self.emit(input, GameEvent::GameStarted { players });
        }

        while let Some(player) = self.next_player() {
            let round = self.turns_played / self.player_count() + 1;
            self.emit(input, GameEvent::TurnStarted { player, round });

            if let TurnOutcome::Quit = self.play_turn(player, input)? {
                return Ok(GameOutcome::Quit { player });
            }
            self.turns_played += 1;
        }

        let result = self.result();
        self.emit(
            input,
            GameEvent::GameFinished {
                result: result.clone(),
                standings: self.leaderboard(),
            },
        );
        Ok(GameOutcome::Finished(result))
    }

    /// Run one turn for `player` without advancing the round counter.
    pub fn play_turn<C: Collaborator + ?Sized>(
        &mut self,
        player: PlayerId,
        input: &mut C,
    ) -> Result<TurnOutcome> {
        let seat = &mut self.players[player];
        Turn::new(seat, &mut self.rng, input, &mut self.history)?.run()
    }

    /// Highest total, or every player tied at it.
    #[must_use]
    pub fn result(&self) -> GameResult {
        GameResult::from_players(&self.players)
    }

    /// Standings, best first.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<Standing> {
        leaderboard(&self.players)
    }

    /// Clear every scoreboard and the history for a fresh game.
    pub fn reset(&mut self) {
        for (_, player) in self.players.iter_mut() {
            player.scoreboard.reset();
        }
        self.history.clear();
        self.turns_played = 0;
    }

    fn emit<C: Collaborator + ?Sized>(&mut self, input: &mut C, event: GameEvent) {
        input.notify(&event);
        self.history.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRolls;
    use crate::dice::DiceSet;
    use crate::game::TurnAction;
    use crate::rules::playable;
    use crate::scoring::Category;

    /// Keeps the first roll and fills the first playable category.
    struct FirstOpen;

    impl Collaborator for FirstOpen {
        fn request_actions(&mut self, _: &Player, _: &DiceSet) -> Vec<TurnAction> {
            vec![TurnAction::Keep]
        }

        fn request_category(
            &mut self,
            player: &Player,
            dice: &DiceSet,
            available: &[Category],
            _: bool,
        ) -> Category {
            playable(player, dice, available)[0]
        }

        fn confirm_zero_score(&mut self, _: Category, _: i32) -> bool {
            true
        }
    }

    struct QuitFirst;

    impl Collaborator for QuitFirst {
        fn request_actions(&mut self, _: &Player, _: &DiceSet) -> Vec<TurnAction> {
            vec![TurnAction::Quit]
        }

        fn request_category(&mut self, _: &Player, _: &DiceSet, _: &[Category], _: bool) -> Category {
            Category::Chance
        }

        fn confirm_zero_score(&mut self, _: Category, _: i32) -> bool {
            true
        }
    }

    #[test]
    fn test_full_game_fills_every_board() {
        let mut game = Game::new(["Ada", "Bo", "Cy"], GameRng::new(7));
        let outcome = game.play(&mut FirstOpen).unwrap();

        assert!(matches!(outcome, GameOutcome::Finished(_)));
        assert!(game.is_finished());
        assert_eq!(game.next_player(), None);
        for (_, player) in game.players().iter() {
            assert!(player.scoreboard.is_complete());
        }
    }

    #[test]
    fn test_play_after_finish_is_idempotent() {
        let mut game = Game::new(["Ada", "Bo"], GameRng::new(4));
        let first = game.play(&mut FirstOpen).unwrap();
        let events = game.history().len();

        let again = game.play(&mut FirstOpen).unwrap();

        assert_eq!(first, again);
        assert_eq!(game.history().len(), events);
        let finishes = game
            .history()
            .iter()
            .filter(|e| matches!(e, GameEvent::GameFinished { .. }))
            .count();
        assert_eq!(finishes, 1);
    }

    #[test]
    fn test_identical_dice_tie() {
        // every die shows 6 for every player
        let mut game = Game::new(["Ada", "Bo"], ScriptedRolls::new([6]));
        let outcome = game.play(&mut FirstOpen).unwrap();

        let GameOutcome::Finished(result) = outcome else {
            panic!("game did not finish");
        };
        assert_eq!(
            result,
            GameResult::Tie {
                players: vec![PlayerId::new(0), PlayerId::new(1)],
                score: game.player(PlayerId::new(0)).score(),
            }
        );
    }

    #[test]
    fn test_quit_stops_game() {
        let mut game = Game::new(["Ada", "Bo"], GameRng::new(1));
        let outcome = game.play(&mut QuitFirst).unwrap();

        assert_eq!(outcome, GameOutcome::Quit { player: PlayerId::new(0) });
        assert_eq!(game.turns_remaining(), 26);
        assert_eq!(
            game.history().last(),
            Some(&GameEvent::PlayerQuit { player: PlayerId::new(0) })
        );
    }

    #[test]
    fn test_reset_restarts() {
        let mut game = Game::new(["Ada"], GameRng::new(3));
        game.play(&mut FirstOpen).unwrap();
        assert!(game.is_finished());

        game.reset();
        assert_eq!(game.turns_remaining(), ROUNDS);
        assert!(game.history().is_empty());
        assert_eq!(game.player(PlayerId::new(0)).score(), 0);
    }

    #[test]
    fn test_from_config() {
        let config = GameConfig::new(["Ada", "Bo"]).with_seed(11);
        let game = Game::from_config(&config).unwrap();
        assert_eq!(game.player(PlayerId::new(1)).name(), "Bo");

        assert!(Game::from_config(&GameConfig::default()).is_err());
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = Game::new(["Ada", "Bo"], GameRng::new(99));
        let mut b = Game::new(["Ada", "Bo"], GameRng::new(99));
        a.play(&mut FirstOpen).unwrap();
        b.play(&mut FirstOpen).unwrap();

        assert_eq!(a.result(), b.result());
        assert_eq!(a.history(), b.history());
    }
}
