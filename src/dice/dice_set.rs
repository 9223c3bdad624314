//! Ordered set of dice rolled together in a turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::die::Die;
use super::evaluator::FaceCounts;
use crate::core::{DiceSpec, RollSource, DICE_SIDES, STANDARD_DICE};
use crate::error::{Result, YahtzeeError};

/// Positional collection of dice.
///
/// Index order is meaningful: players hold or release dice by position.
/// SmallVec keeps the standard five dice inline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSet {
    dice: SmallVec<[Die; 5]>,
    max_sides: u8,
}

impl DiceSet {
    /// Build a set from a composition, drawing every die's initial face.
    ///
    /// Dice are laid out in composition order.
    pub fn new<R: RollSource + ?Sized>(composition: &[DiceSpec], rng: &mut R) -> Result<Self> {
        let mut dice = SmallVec::new();
        for spec in composition {
            for _ in 0..spec.count {
                dice.push(Die::new(spec.sides, rng)?);
            }
        }
        Self::from_dice(dice)
    }

    /// Five six-sided dice.
    pub fn standard<R: RollSource + ?Sized>(rng: &mut R) -> Result<Self> {
        Self::new(&STANDARD_DICE, rng)
    }

    /// Six-sided dice showing the given faces, none held.
    ///
    /// ```
    /// use yahtzee_engine::dice::DiceSet;
    ///
    /// let dice = DiceSet::from_faces(&[2, 2, 5, 2, 6]).unwrap();
    /// assert_eq!(dice.sum(), 17);
    /// ```
    pub fn from_faces(faces: &[u8]) -> Result<Self> {
        let dice = faces
            .iter()
            .map(|&face| Die::with_face(DICE_SIDES, face))
            .collect::<Result<SmallVec<[Die; 5]>>>()?;
        Self::from_dice(dice)
    }

    fn from_dice(dice: SmallVec<[Die; 5]>) -> Result<Self> {
        let max_sides = dice
            .iter()
            .map(Die::sides)
            .max()
            .ok_or(YahtzeeError::InvalidDie {
                msg: "a dice set needs at least one die",
            })?;
        Ok(Self { dice, max_sides })
    }

    /// Roll every die that is not held.
    pub fn roll_all<R: RollSource + ?Sized>(&mut self, rng: &mut R) {
        for die in &mut self.dice {
            die.roll(rng);
        }
    }

    /// Hold (`true`) or release (`false`) every die.
    pub fn set_held_all(&mut self, held: bool) {
        for die in &mut self.dice {
            die.set_held(held);
        }
    }

    /// Flip the held flag of the die at `index`.
    pub fn toggle_held(&mut self, index: usize) -> Result<()> {
        let len = self.dice.len();
        let die = self
            .dice
            .get_mut(index)
            .ok_or(YahtzeeError::IndexOutOfRange { index, len })?;
        die.toggle_held();
        Ok(())
    }

    /// True if at least one die would change on the next roll.
    #[must_use]
    pub fn any_unheld(&self) -> bool {
        self.dice.iter().any(|d| !d.is_held())
    }

    /// Sum of all faces.
    #[must_use]
    pub fn sum(&self) -> i32 {
        self.dice.iter().map(|d| i32::from(d.face())).sum()
    }

    /// Sum of the faces equal to `face`.
    #[must_use]
    pub fn sum_of(&self, face: u8) -> i32 {
        self.dice
            .iter()
            .filter(|d| d.face() == face)
            .map(|d| i32::from(d.face()))
            .sum()
    }

    /// Current faces in positional order.
    #[must_use]
    pub fn faces(&self) -> SmallVec<[u8; 5]> {
        self.dice.iter().map(Die::face).collect()
    }

    /// Occurrence counts per face value.
    #[must_use]
    pub fn counts(&self) -> FaceCounts {
        FaceCounts::from_dice(self)
    }

    /// Largest side count in the set.
    #[must_use]
    pub fn max_sides(&self) -> u8 {
        self.max_sides
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Always false; a set holds at least one die.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Die> {
        self.dice.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Die> {
        self.dice.iter()
    }
}

impl std::fmt::Display for DiceSet {
    /// Faces in order, released dice marked with `*`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, die) in self.dice.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", die.face())?;
            if !die.is_held() {
                write!(f, "*")?;
            }
        }
        Ok(())
    }
}
