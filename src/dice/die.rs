//! A single die.

use serde::{Deserialize, Serialize};

use crate::core::RollSource;
use crate::error::{Result, YahtzeeError};

/// One die: side count, current face and held flag.
///
/// A held die keeps its face when rolled. New dice are not held and already
/// show a face drawn from the source they were built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    sides: u8,
    face: u8,
    held: bool,
}

impl Die {
    /// Create a die and draw its initial face.
    pub fn new<R: RollSource + ?Sized>(sides: u8, rng: &mut R) -> Result<Self> {
        if sides == 0 {
            return Err(YahtzeeError::InvalidDie {
                msg: "a die needs at least one side",
            });
        }
        let mut die = Self {
            sides,
            face: 1,
            held: false,
        };
        die.roll(rng);
        Ok(die)
    }

    /// Create a die showing a known face.
    pub fn with_face(sides: u8, face: u8) -> Result<Self> {
        if sides == 0 {
            return Err(YahtzeeError::InvalidDie {
                msg: "a die needs at least one side",
            });
        }
        if !(1..=sides).contains(&face) {
            return Err(YahtzeeError::InvalidDie {
                msg: "face outside the die's range",
            });
        }
        Ok(Self {
            sides,
            face,
            held: false,
        })
    }

    /// Roll unless held. Returns the face after the roll.
    ///
    /// A face the source reports outside `1..=sides` is clamped into range.
    pub fn roll<R: RollSource + ?Sized>(&mut self, rng: &mut R) -> u8 {
        if !self.held {
            self.face = rng.roll_face(self.sides).clamp(1, self.sides);
        }
        self.face
    }

    #[must_use]
    pub fn face(&self) -> u8 {
        self.face
    }

    #[must_use]
    pub fn sides(&self) -> u8 {
        self.sides
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn set_held(&mut self, held: bool) {
        self.held = held;
    }

    pub fn toggle_held(&mut self) {
        self.held = !self.held;
    }
}
