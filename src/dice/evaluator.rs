//! Category predicates over a dice set.
//!
//! Everything is derived from a per-face occurrence table sized to the
//! largest die in the set. Face `v` lives at index `v - 1`.

use smallvec::SmallVec;

use super::dice_set::DiceSet;

/// Occurrence count per face value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceCounts {
    counts: SmallVec<[u8; 6]>,
    dice: usize,
}

impl FaceCounts {
    /// Count the faces currently showing.
    #[must_use]
    pub fn from_dice(dice: &DiceSet) -> Self {
        let mut counts: SmallVec<[u8; 6]> = SmallVec::from_elem(0, usize::from(dice.max_sides()));
        for die in dice.iter() {
            counts[usize::from(die.face()) - 1] += 1;
        }
        Self {
            counts,
            dice: dice.len(),
        }
    }

    /// How many dice show `face`.
    #[must_use]
    pub fn count(&self, face: u8) -> u8 {
        usize::from(face)
            .checked_sub(1)
            .and_then(|i| self.counts.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// True if some face appears at least `n` times.
    #[must_use]
    pub fn is_kind_of_at_least(&self, n: usize) -> bool {
        self.counts.iter().any(|&c| usize::from(c) >= n)
    }

    /// True when every die shows the same face.
    #[must_use]
    pub fn is_yahtzee(&self) -> bool {
        self.is_kind_of_at_least(self.dice)
    }

    /// Exactly a pair and a triple of different faces.
    #[must_use]
    pub fn is_full_house(&self) -> bool {
        let pair = self.counts.iter().any(|&c| c == 2);
        let triple = self.counts.iter().any(|&c| c == 3);
        pair && triple
    }

    /// Longest run of consecutive present faces is at least `n`.
    #[must_use]
    pub fn is_straight(&self, n: usize) -> bool {
        self.longest_run() >= n
    }

    fn longest_run(&self) -> usize {
        let mut run = 0;
        let mut max_run = 0;
        for &c in &self.counts {
            if c >= 1 {
                run += 1;
                max_run = max_run.max(run);
            } else {
                run = 0;
            }
        }
        max_run
    }
}
