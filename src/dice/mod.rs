//! Dice: single dice, positional dice sets and the category predicates
//! evaluated over them.

pub mod dice_set;
pub mod die;
pub mod evaluator;

pub use dice_set::DiceSet;
pub use die::Die;
pub use evaluator::FaceCounts;
