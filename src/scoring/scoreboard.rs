//! Per-player scoreboard.
//!
//! One optional value per category. Values are write-once, except the
//! Yahtzee box which accumulates: a first Yahtzee commits 50 and every
//! bonus Yahtzee adds 100 on top.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::scorer::{self, BONUS_YAHTZEE_SCORE, YAHTZEE_SCORE};
use crate::error::{Result, YahtzeeError};

/// Committed scores for one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scoreboard {
    slots: [Option<i32>; Category::COUNT],
}

impl Scoreboard {
    /// Empty board, every category open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True once `category` holds a value.
    #[must_use]
    pub fn is_played(&self, category: Category) -> bool {
        self.slots[category.index()].is_some()
    }

    /// Committed value, if any.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<i32> {
        self.slots[category.index()]
    }

    /// Committed value, 0 when open.
    #[must_use]
    pub fn value(&self, category: Category) -> i32 {
        self.get(category).unwrap_or(0)
    }

    /// Write `value` into `category`.
    ///
    /// The Yahtzee box adds onto whatever it holds. Any other box already
    /// played, or a Yahtzee sum that does not fit in an `i32`, is an
    /// `InvalidState` error and leaves the board untouched.
    pub fn commit(&mut self, category: Category, value: i32) -> Result<()> {
        let slot = &mut self.slots[category.index()];
        match (category, *slot) {
            (Category::Yahtzee, prev) => {
                let sum = prev.unwrap_or(0).checked_add(value).ok_or_else(|| {
                    YahtzeeError::InvalidState {
                        msg: format!("{category} total overflows"),
                    }
                })?;
                *slot = Some(sum);
            }
            (_, Some(_)) => return Err(YahtzeeError::already_played(category)),
            (_, None) => *slot = Some(value),
        }
        Ok(())
    }

    /// Clear every box.
    pub fn reset(&mut self) {
        self.slots = [None; Category::COUNT];
    }

    /// Sum of committed upper boxes, without the bonus.
    #[must_use]
    pub fn upper_raw(&self) -> i32 {
        self.section_sum(true)
    }

    /// Upper sum with the bonus applied, saturating at `i32::MAX`.
    #[must_use]
    pub fn upper_total(&self) -> i32 {
        i32::try_from(scorer::add_bonus(self.upper_raw())).unwrap_or(i32::MAX)
    }

    /// Bonus currently earned by the upper section.
    #[must_use]
    pub fn upper_bonus(&self) -> i32 {
        scorer::upper_bonus(self.upper_raw())
    }

    #[must_use]
    pub fn has_upper_bonus(&self) -> bool {
        scorer::has_upper_bonus(self.upper_raw())
    }

    /// Summed distance from par across committed upper boxes.
    #[must_use]
    pub fn bonus_differential(&self) -> i32 {
        self.played()
            .map(|(category, value)| scorer::bonus_differential(category, value))
            .sum()
    }

    #[must_use]
    pub fn lower_total(&self) -> i32 {
        self.section_sum(false)
    }

    /// Grand total. Recomputed on every call.
    #[must_use]
    pub fn total(&self) -> i32 {
        self.upper_total().saturating_add(self.lower_total())
    }

    /// True once the Yahtzee box holds a nonzero value.
    #[must_use]
    pub fn had_yahtzee(&self) -> bool {
        self.value(Category::Yahtzee) != 0
    }

    /// Yahtzees scored, recovered from the accumulated Yahtzee box.
    #[must_use]
    pub fn yahtzee_count(&self) -> u32 {
        let value = self.value(Category::Yahtzee);
        if value > 0 {
            ((value - YAHTZEE_SCORE) / BONUS_YAHTZEE_SCORE + 1) as u32
        } else {
            0
        }
    }

    /// Yahtzees beyond the first.
    #[must_use]
    pub fn bonus_yahtzee_count(&self) -> u32 {
        self.yahtzee_count().saturating_sub(1)
    }

    /// Categories still open, in display order.
    pub fn open_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|&c| !self.is_played(c))
    }

    /// Committed (category, value) pairs, in display order.
    pub fn played(&self) -> impl Iterator<Item = (Category, i32)> + '_ {
        Category::ALL
            .into_iter()
            .filter_map(|c| self.get(c).map(|v| (c, v)))
    }

    /// True when no box is open.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.open_categories().next().is_none()
    }

    fn section_sum(&self, upper: bool) -> i32 {
        self.played()
            .filter(|(c, _)| c.is_upper() == upper)
            .fold(0i32, |acc, (_, v)| acc.saturating_add(v))
    }
}
