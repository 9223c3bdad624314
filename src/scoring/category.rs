//! The thirteen scoring categories.

use serde::{Deserialize, Serialize};

/// A box on the scoreboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    // Upper section
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    // Lower section
    ThreeOfAKind,
    FourOfAKind,
    LowStraight,
    HighStraight,
    FullHouse,
    Chance,
    Yahtzee,
}

/// Upper category for each face value, `UPPER_BY_FACE[face - 1]`.
const UPPER_BY_FACE: [(u8, Category); 6] = [
    (1, Category::Ones),
    (2, Category::Twos),
    (3, Category::Threes),
    (4, Category::Fours),
    (5, Category::Fives),
    (6, Category::Sixes),
];

impl Category {
    /// Number of categories on a board.
    pub const COUNT: usize = 13;

    /// Display order: upper section, then lower section.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::LowStraight,
        Category::HighStraight,
        Category::FullHouse,
        Category::Chance,
        Category::Yahtzee,
    ];

    pub const UPPER: [Category; 6] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
    ];

    /// Kind boxes offered by the bonus-Yahtzee cascade.
    pub const KINDS: [Category; 2] = [Category::ThreeOfAKind, Category::FourOfAKind];

    /// Combo boxes a bonus Yahtzee may fill at full value.
    pub const COMBOS: [Category; 4] = [
        Category::Chance,
        Category::LowStraight,
        Category::HighStraight,
        Category::FullHouse,
    ];

    /// Stable slot index used by the scoreboard.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn is_upper(self) -> bool {
        self.upper_face().is_some()
    }

    /// Face value matched by an upper category.
    ///
    /// ```
    /// use yahtzee_engine::scoring::Category;
    ///
    /// assert_eq!(Category::Threes.upper_face(), Some(3));
    /// assert_eq!(Category::Chance.upper_face(), None);
    /// ```
    #[must_use]
    pub fn upper_face(self) -> Option<u8> {
        UPPER_BY_FACE
            .iter()
            .find(|(_, category)| *category == self)
            .map(|(face, _)| *face)
    }

    /// Upper category scoring `face`, if `face` is 1..=6.
    #[must_use]
    pub fn from_upper_face(face: u8) -> Option<Category> {
        UPPER_BY_FACE
            .iter()
            .find(|(f, _)| *f == face)
            .map(|(_, category)| *category)
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Ones => "Ones",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::ThreeOfAKind => "3 of a Kind",
            Category::FourOfAKind => "4 of a Kind",
            Category::LowStraight => "Low Straight",
            Category::HighStraight => "High Straight",
            Category::FullHouse => "Full House",
            Category::Chance => "Chance",
            Category::Yahtzee => "Yahtzee",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
