//! Game events and the event journal.
//!
//! Every notable step of a game is emitted as a [`GameEvent`]: the
//! collaborator receives it through `notify`, and the game appends it to its
//! [`EventLog`]. The log is an `im::Vector`, so cloning a game's history is
//! O(1), and it renders to newline-delimited JSON for post-mortems.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::rules::{GameResult, Standing};
use crate::scoring::Category;

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    GameStarted {
        players: Vec<String>,
    },
    TurnStarted {
        player: PlayerId,
        round: usize,
    },
    /// Dice after the initial roll or a re-roll.
    DiceRolled {
        player: PlayerId,
        faces: Vec<u8>,
        rerolls_remaining: u8,
    },
    /// Re-roll requested with every die held.
    NoDiceSelected {
        player: PlayerId,
    },
    /// Re-roll requested with none left.
    OutOfRerolls {
        player: PlayerId,
    },
    /// The collaborator chose a category that cannot take these dice.
    CategoryRejected {
        player: PlayerId,
        category: Category,
    },
    /// The player declined to fill a category with zero.
    ZeroScoreDeclined {
        player: PlayerId,
        category: Category,
    },
    ScoreCommitted {
        player: PlayerId,
        category: Category,
        score: i32,
    },
    /// A repeat Yahtzee added its bonus to the Yahtzee box.
    BonusYahtzee {
        player: PlayerId,
        score: i32,
    },
    /// The bonus-Yahtzee cascade filled the matching upper box on its own.
    AutoFilled {
        player: PlayerId,
        category: Category,
        score: i32,
    },
    PlayerQuit {
        player: PlayerId,
    },
    GameFinished {
        result: GameResult,
        standings: Vec<Standing>,
    },
}

impl GameEvent {
    /// Player the event concerns, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::TurnStarted { player, .. }
            | GameEvent::DiceRolled { player, .. }
            | GameEvent::NoDiceSelected { player }
            | GameEvent::OutOfRerolls { player }
            | GameEvent::CategoryRejected { player, .. }
            | GameEvent::ZeroScoreDeclined { player, .. }
            | GameEvent::ScoreCommitted { player, .. }
            | GameEvent::BonusYahtzee { player, .. }
            | GameEvent::AutoFilled { player, .. }
            | GameEvent::PlayerQuit { player } => Some(*player),
            GameEvent::GameStarted { .. } | GameEvent::GameFinished { .. } => None,
        }
    }
}

/// Append-only journal of emitted events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vector<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// One JSON object per line.
    pub fn to_ndjson(&self) -> Result<String, serde_json::Error> {
        let mut out = String::new();
        for event in &self.events {
            out.push_str(&serde_json::to_string(event)?);
            out.push('\n');
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_appends_in_order() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push(GameEvent::TurnStarted {
            player: PlayerId::new(0),
            round: 1,
        });
        log.push(GameEvent::OutOfRerolls {
            player: PlayerId::new(0),
        });

        assert_eq!(log.len(), 2);
        assert_eq!(
            log.last(),
            Some(&GameEvent::OutOfRerolls {
                player: PlayerId::new(0)
            })
        );

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_event_player() {
        let event = GameEvent::ScoreCommitted {
            player: PlayerId::new(2),
            category: Category::Chance,
            score: 20,
        };
        assert_eq!(event.player(), Some(PlayerId::new(2)));
        assert_eq!(GameEvent::GameStarted { players: vec![] }.player(), None);
    }

    #[test]
    fn test_ndjson_is_tagged() {
        let mut log = EventLog::new();
        log.push(GameEvent::AutoFilled {
            player: PlayerId::new(1),
            category: Category::Threes,
            score: 15,
        });
        log.push(GameEvent::PlayerQuit {
            player: PlayerId::new(0),
        });

        let ndjson = log.to_ndjson().unwrap();
        let lines: Vec<_> = ndjson.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["event"], "auto_filled");
        assert_eq!(first["category"], "Threes");
        assert_eq!(first["score"], 15);

        let back: GameEvent = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(back.player(), Some(PlayerId::new(0)));
    }
}
