//! Category legality and end-of-game results.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, PlayerMap};
use crate::dice::DiceSet;
use crate::scoring::Category;

/// Whether `player` may put the current dice into `category`.
///
/// Open categories are always playable. The Yahtzee box is also playable
/// when already filled with a nonzero Yahtzee and the dice show another one.
#[must_use]
pub fn can_play(player: &Player, category: Category, dice: &DiceSet) -> bool {
    if !player.scoreboard.is_played(category) {
        return true;
    }
    category == Category::Yahtzee && player.had_yahtzee() && dice.counts().is_yahtzee()
}

/// Playable members of `offered`, in the order given.
#[must_use]
pub fn playable(player: &Player, dice: &DiceSet, offered: &[Category]) -> Vec<Category> {
    offered
        .iter()
        .copied()
        .filter(|&c| can_play(player, c, dice))
        .collect()
}

/// One row of the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub score: i32,
    pub yahtzees: u32,
    pub upper_bonus: bool,
}

impl Standing {
    #[must_use]
    pub fn of(player: &Player) -> Self {
        Self {
            player: player.id(),
            name: player.name().to_string(),
            score: player.score(),
            yahtzees: player.scoreboard.yahtzee_count(),
            upper_bonus: player.scoreboard.has_upper_bonus(),
        }
    }
}

/// Standings sorted by score, highest first. Ties keep seat order.
#[must_use]
pub fn leaderboard(players: &PlayerMap<Player>) -> Vec<Standing> {
    let mut rows: Vec<_> = players.iter().map(|(_, p)| Standing::of(p)).collect();
    rows.sort_by(|a, b| b.score.cmp(&a.score));
    rows
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single highest score.
    Winner { player: PlayerId, score: i32 },
    /// Several players share the highest score, in seat order.
    Tie { players: Vec<PlayerId>, score: i32 },
}

impl GameResult {
    /// Collect every player at the maximum total.
    #[must_use]
    pub fn from_players(players: &PlayerMap<Player>) -> Self {
        let score = players
            .iter()
            .map(|(_, p)| p.score())
            .max()
            .unwrap_or(0);
        let mut top: Vec<_> = players
            .iter()
            .filter(|(_, p)| p.score() == score)
            .map(|(id, _)| id)
            .collect();

        if top.len() == 1 {
            GameResult::Winner {
                player: top.remove(0),
                score,
            }
        } else {
            GameResult::Tie {
                players: top,
                score,
            }
        }
    }

    /// Check if a player won or shares the win.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner { player: p, .. } => *p == player,
            GameResult::Tie { players, .. } => players.contains(&player),
        }
    }

    /// Winning total.
    #[must_use]
    pub fn score(&self) -> i32 {
        match self {
            GameResult::Winner { score, .. } | GameResult::Tie { score, .. } => *score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(scores: &[i32]) -> PlayerMap<Player> {
        PlayerMap::new(scores.len(), |id| {
            let mut p = Player::new(id, format!("P{}", id.0));
            p.scoreboard.commit(Category::Chance, scores[id.index()]).unwrap();
            p
        })
    }

    #[test]
    fn test_can_play_open_category() {
        let player = Player::new(PlayerId::new(0), "Ada");
        let dice = DiceSet::from_faces(&[1, 2, 3, 4, 5]).unwrap();
        for category in Category::ALL {
            assert!(can_play(&player, category, &dice));
        }
    }

    #[test]
    fn test_can_play_repeat_yahtzee() {
        let mut player = Player::new(PlayerId::new(0), "Ada");
        player.scoreboard.commit(Category::Yahtzee, 50).unwrap();

        let yahtzee = DiceSet::from_faces(&[2, 2, 2, 2, 2]).unwrap();
        let other = DiceSet::from_faces(&[2, 2, 2, 2, 1]).unwrap();
        assert!(can_play(&player, Category::Yahtzee, &yahtzee));
        assert!(!can_play(&player, Category::Yahtzee, &other));
    }

    #[test]
    fn test_scratched_yahtzee_stays_closed() {
        let mut player = Player::new(PlayerId::new(0), "Ada");
        player.scoreboard.commit(Category::Yahtzee, 0).unwrap();
        let yahtzee = DiceSet::from_faces(&[6, 6, 6, 6, 6]).unwrap();
        assert!(!can_play(&player, Category::Yahtzee, &yahtzee));
    }

    #[test]
    fn test_playable_filters_offered() {
        let mut player = Player::new(PlayerId::new(0), "Ada");
        player.scoreboard.commit(Category::ThreeOfAKind, 12).unwrap();
        let dice = DiceSet::from_faces(&[4, 4, 4, 4, 4]).unwrap();
        assert_eq!(
            playable(&player, &dice, &Category::KINDS),
            vec![Category::FourOfAKind]
        );
    }

    #[test]
    fn test_single_winner() {
        let result = GameResult::from_players(&players(&[10, 30, 20]));
        assert_eq!(
            result,
            GameResult::Winner {
                player: PlayerId::new(1),
                score: 30
            }
        );
        assert!(result.is_winner(PlayerId::new(1)));
        assert!(!result.is_winner(PlayerId::new(0)));
    }

    #[test]
    fn test_tie() {
        let result = GameResult::from_players(&players(&[30, 10, 30]));
        assert_eq!(
            result,
            GameResult::Tie {
                players: vec![PlayerId::new(0), PlayerId::new(2)],
                score: 30
            }
        );
        assert!(result.is_winner(PlayerId::new(2)));
        assert_eq!(result.score(), 30);
    }

    #[test]
    fn test_leaderboard_order() {
        let rows = leaderboard(&players(&[5, 25, 5]));
        let order: Vec<_> = rows.iter().map(|r| r.player).collect();
        assert_eq!(order, vec![PlayerId::new(1), PlayerId::new(0), PlayerId::new(2)]);
        assert_eq!(rows[0].score, 25);
        assert_eq!(rows[0].name, "P1");
    }
}
