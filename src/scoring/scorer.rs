//! Category scoring rules and upper-section bonus arithmetic.
//!
//! Scoring is a single pure dispatch over [`Category`]. Nothing here mutates
//! the dice or the board.

use super::category::Category;
use super::scoreboard::Scoreboard;
use crate::dice::DiceSet;

/// Raw upper sum needed for the bonus.
pub const UPPER_BONUS_THRESHOLD: i32 = 63;
/// Flat upper-section bonus.
pub const UPPER_BONUS: i32 = 35;
pub const LOW_STRAIGHT_SCORE: i32 = 30;
pub const HIGH_STRAIGHT_SCORE: i32 = 40;
pub const FULL_HOUSE_SCORE: i32 = 25;
/// First Yahtzee.
pub const YAHTZEE_SCORE: i32 = 50;
/// Every Yahtzee after a scored one.
pub const BONUS_YAHTZEE_SCORE: i32 = 100;

/// Per-face par used by [`bonus_differential`]: three of each face reaches 63.
const BONUS_PAR_DICE: i32 = 3;

/// Points `category` would earn for `dice` on `board`.
///
/// With `bonus_yahtzee` set, the fixed-value combos (straights and full
/// house) pay out regardless of the dice. Dice-derived categories ignore
/// the flag.
///
/// ```
/// use yahtzee_engine::dice::DiceSet;
/// use yahtzee_engine::scoring::{score, Category, Scoreboard};
///
/// let dice = DiceSet::from_faces(&[2, 2, 5, 2, 6]).unwrap();
/// assert_eq!(score(Category::Twos, &Scoreboard::new(), &dice, false), 6);
/// ```
#[must_use]
pub fn score(category: Category, board: &Scoreboard, dice: &DiceSet, bonus_yahtzee: bool) -> i32 {
    let counts = dice.counts();
    let fixed = |value: i32, hit: bool| if bonus_yahtzee || hit { value } else { 0 };

    match category {
        Category::Ones
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes => category.upper_face().map_or(0, |face| dice.sum_of(face)),
        Category::ThreeOfAKind => kind_sum(dice, counts.is_kind_of_at_least(3)),
        Category::FourOfAKind => kind_sum(dice, counts.is_kind_of_at_least(4)),
        Category::LowStraight => fixed(LOW_STRAIGHT_SCORE, counts.is_straight(4)),
        Category::HighStraight => fixed(HIGH_STRAIGHT_SCORE, counts.is_straight(5)),
        Category::FullHouse => fixed(FULL_HOUSE_SCORE, counts.is_full_house()),
        Category::Chance => dice.sum(),
        Category::Yahtzee => {
            if !counts.is_yahtzee() {
                0
            } else if !board.is_played(Category::Yahtzee) {
                YAHTZEE_SCORE
            } else if board.had_yahtzee() {
                BONUS_YAHTZEE_SCORE
            } else {
                0
            }
        }
    }
}

fn kind_sum(dice: &DiceSet, hit: bool) -> i32 {
    if hit {
        dice.sum()
    } else {
        0
    }
}

/// Score every category for the current dice, in display order.
#[must_use]
pub fn potential_scores(
    board: &Scoreboard,
    dice: &DiceSet,
    bonus_yahtzee: bool,
) -> [(Category, i32); Category::COUNT] {
    Category::ALL.map(|category| (category, score(category, board, dice, bonus_yahtzee)))
}

/// Bonus earned by a raw upper sum.
#[must_use]
pub fn upper_bonus(raw_upper: i32) -> i32 {
    if raw_upper >= UPPER_BONUS_THRESHOLD {
        UPPER_BONUS
    } else {
        0
    }
}

#[must_use]
pub fn has_upper_bonus(upper: i32) -> bool {
    upper_bonus(upper) > 0
}

/// Raw upper sum to bonus-adjusted upper total.
///
/// Widened to `i64` so every `i32` sum has a representable total.
#[must_use]
pub fn add_bonus(raw_upper: i32) -> i64 {
    i64::from(raw_upper) + i64::from(upper_bonus(raw_upper))
}

/// Inverse of [`add_bonus`]: `remove_bonus(add_bonus(x)) == i64::from(x)`.
#[must_use]
pub fn remove_bonus(upper_total: i64) -> i64 {
    if upper_total >= i64::from(UPPER_BONUS_THRESHOLD) {
        upper_total - i64::from(UPPER_BONUS)
    } else {
        upper_total
    }
}

/// How far a committed upper value sits above or below par (three of the face).
///
/// Lower categories have no par and return 0.
#[must_use]
pub fn bonus_differential(category: Category, value: i32) -> i32 {
    category
        .upper_face()
        .map_or(0, |face| value - i32::from(face) * BONUS_PAR_DICE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dice(faces: &[u8]) -> DiceSet {
        DiceSet::from_faces(faces).unwrap()
    }

    fn fresh() -> Scoreboard {
        Scoreboard::new()
    }

    #[test]
    fn test_upper_scores_match_face_count() {
        let d = dice(&[2, 2, 5, 2, 6]);
        assert_eq!(score(Category::Twos, &fresh(), &d, false), 6);
        assert_eq!(score(Category::Fives, &fresh(), &d, false), 5);
        assert_eq!(score(Category::Ones, &fresh(), &d, false), 0);
        assert_eq!(score(Category::Sixes, &fresh(), &d, true), 6);
    }

    #[test]
    fn test_kind_scores() {
        let d = dice(&[4, 4, 4, 1, 2]);
        assert_eq!(score(Category::ThreeOfAKind, &fresh(), &d, false), 15);
        assert_eq!(score(Category::FourOfAKind, &fresh(), &d, false), 0);
        // bonus flag does not rescue a kind box
        assert_eq!(score(Category::FourOfAKind, &fresh(), &d, true), 0);
    }

    #[test]
    fn test_fixed_scores() {
        assert_eq!(score(Category::LowStraight, &fresh(), &dice(&[1, 2, 3, 4, 6]), false), 30);
        assert_eq!(score(Category::HighStraight, &fresh(), &dice(&[1, 2, 3, 4, 6]), false), 0);
        assert_eq!(score(Category::HighStraight, &fresh(), &dice(&[2, 3, 4, 5, 6]), false), 40);
        assert_eq!(score(Category::FullHouse, &fresh(), &dice(&[3, 3, 3, 5, 5]), false), 25);
        assert_eq!(score(Category::FullHouse, &fresh(), &dice(&[3, 3, 3, 3, 5]), false), 0);
    }

    #[test]
    fn test_bonus_flag_forces_combos() {
        let d = dice(&[5, 5, 5, 5, 5]);
        assert_eq!(score(Category::LowStraight, &fresh(), &d, true), 30);
        assert_eq!(score(Category::HighStraight, &fresh(), &d, true), 40);
        assert_eq!(score(Category::FullHouse, &fresh(), &d, true), 25);
        assert_eq!(score(Category::Chance, &fresh(), &d, true), 25);
        assert_eq!(score(Category::FullHouse, &fresh(), &d, false), 0);
    }

    #[test]
    fn test_chance_is_unconditional() {
        assert_eq!(score(Category::Chance, &fresh(), &dice(&[1, 3, 5, 6, 2]), false), 17);
    }

    #[test]
    fn test_yahtzee_scoring() {
        let yahtzee = dice(&[4, 4, 4, 4, 4]);
        assert_eq!(score(Category::Yahtzee, &fresh(), &yahtzee, false), 50);

        let mut scored = fresh();
        scored.commit(Category::Yahtzee, 50).unwrap();
        assert_eq!(score(Category::Yahtzee, &scored, &yahtzee, true), 100);

        let mut scratched = fresh();
        scratched.commit(Category::Yahtzee, 0).unwrap();
        assert_eq!(score(Category::Yahtzee, &scratched, &yahtzee, false), 0);

        let not_yahtzee = dice(&[4, 4, 4, 4, 3]);
        assert_eq!(score(Category::Yahtzee, &fresh(), &not_yahtzee, false), 0);
        assert_eq!(score(Category::Yahtzee, &scored, &not_yahtzee, true), 0);
    }

    #[test]
    fn test_potential_scores_cover_all_categories() {
        let scores = potential_scores(&fresh(), &dice(&[3, 3, 3, 5, 5]), false);
        assert_eq!(scores.len(), Category::COUNT);
        assert_eq!(scores[Category::Threes.index()], (Category::Threes, 9));
        assert_eq!(scores[Category::FullHouse.index()], (Category::FullHouse, 25));
        assert_eq!(scores[Category::Yahtzee.index()], (Category::Yahtzee, 0));
    }

    #[test]
    fn test_upper_bonus_threshold() {
        assert_eq!(upper_bonus(62), 0);
        assert_eq!(upper_bonus(63), 35);
        assert_eq!(add_bonus(62), 62);
        assert_eq!(add_bonus(63), 98);
        assert_eq!(remove_bonus(98), 63);
        assert!(has_upper_bonus(70));
        assert!(!has_upper_bonus(0));
    }

    #[test]
    fn test_bonus_round_trip_at_extremes() {
        for raw in [i32::MIN, -1, 0, 62, 63, i32::MAX - 35, i32::MAX - 10, i32::MAX] {
            assert_eq!(remove_bonus(add_bonus(raw)), i64::from(raw), "raw={raw}");
        }
        assert_eq!(add_bonus(i32::MAX), i64::from(i32::MAX) + 35);
        assert_eq!(add_bonus(i32::MIN), i64::from(i32::MIN));
    }

    #[test]
    fn test_bonus_differential() {
        assert_eq!(bonus_differential(Category::Fours, 12), 0);
        assert_eq!(bonus_differential(Category::Fours, 16), 4);
        assert_eq!(bonus_differential(Category::Sixes, 12), -6);
        assert_eq!(bonus_differential(Category::Chance, 30), 0);
    }
}
