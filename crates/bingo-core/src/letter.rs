//! Bingo letter ranges.

use std::{
    fmt::{self, Display},
    ops::RangeInclusive,
};

use crate::CalledNumber;

/// One of the five bingo column letters.
///
/// Each letter owns a contiguous band of fifteen numbers. Together the bands
/// cover 1-75 without overlap.
///
/// # Examples
///
/// ```
/// use bingo_core::Letter;
///
/// assert_eq!(Letter::N.range(), 31..=45);
/// assert_eq!(Letter::from_char('g'), Some(Letter::G));
/// assert_eq!(Letter::ALL.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Letter {
    /// Numbers 1-15.
    B,
    /// Numbers 16-30.
    I,
    /// Numbers 31-45.
    N,
    /// Numbers 46-60.
    G,
    /// Numbers 61-75.
    O,
}

impl Letter {
    /// All letters in board order.
    pub const ALL: [Self; 5] = [Self::B, Self::I, Self::N, Self::G, Self::O];

    /// Count of numbers in each letter band.
    pub const BAND_LEN: u8 = 15;

    /// Returns the letter owning `value`, or `None` if `value` is outside 1-75.
    #[must_use]
    pub const fn for_value(value: u8) -> Option<Self> {
        match value {
            1..=15 => Some(Self::B),
            16..=30 => Some(Self::I),
            31..=45 => Some(Self::N),
            46..=60 => Some(Self::G),
            61..=75 => Some(Self::O),
            _ => None,
        }
    }

    /// Returns the inclusive numeric band of this letter.
    #[must_use]
    pub const fn range(self) -> RangeInclusive<u8> {
        let start = self.index() * Self::BAND_LEN + 1;
        start..=start + Self::BAND_LEN - 1
    }

    /// Returns the column index of this letter (0 for B, 4 for O).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Parses a letter from a single character, ignoring case.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'B' => Some(Self::B),
            'I' => Some(Self::I),
            'N' => Some(Self::N),
            'G' => Some(Self::G),
            'O' => Some(Self::O),
            _ => None,
        }
    }

    /// Returns the uppercase character for this letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::B => 'B',
            Self::I => 'I',
            Self::N => 'N',
            Self::G => 'G',
            Self::O => 'O',
        }
    }

    /// Returns an iterator over the numbers in this letter's column, ascending.
    pub fn numbers(self) -> impl DoubleEndedIterator<Item = CalledNumber> + ExactSizeIterator {
        self.range().map(CalledNumber::from_value)
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
