//! Categories, the scoring function and the per-player scoreboard.

pub mod category;
pub mod scoreboard;
pub mod scorer;

pub use category::Category;
pub use scoreboard::Scoreboard;
pub use scorer::{
    add_bonus, bonus_differential, has_upper_bonus, potential_scores, remove_bonus, score,
    upper_bonus, BONUS_YAHTZEE_SCORE, FULL_HOUSE_SCORE, HIGH_STRAIGHT_SCORE, LOW_STRAIGHT_SCORE,
    UPPER_BONUS, UPPER_BONUS_THRESHOLD, YAHTZEE_SCORE,
};
