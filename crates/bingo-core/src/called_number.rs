//! Validated bingo numbers.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Letter, ParseError, parse};

/// A bingo number in the range 1-75.
///
/// Values can only be constructed through validating constructors, so every
/// `CalledNumber` has a well-defined [`Letter`].
///
/// The [`Display`] form is `<letter>-<number>` (for example `B-12`), which
/// [`parse`] accepts back.
///
/// # Examples
///
/// ```
/// use bingo_core::{CalledNumber, Letter};
///
/// let number = CalledNumber::new(42).unwrap();
/// assert_eq!(number.letter(), Letter::N);
/// assert_eq!(number.to_string(), "N-42");
///
/// assert!(CalledNumber::new(0).is_none());
/// assert!(CalledNumber::new(76).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalledNumber(u8);

impl CalledNumber {
    /// Smallest number on the board.
    pub const MIN: Self = Self(1);
    /// Largest number on the board.
    pub const MAX: Self = Self(75);

    /// Creates a number, returning `None` if `value` is outside 1-75.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Creates a number from a value known to be in 1-75.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-75.
    ///
    /// ```should_panic
    /// use bingo_core::CalledNumber;
    ///
    /// let _ = CalledNumber::from_value(76);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::new(value).unwrap_or_else(|| panic!("Invalid bingo number: {value}"))
    }

    /// Returns the numeric value (1-75).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the letter whose band contains this number.
    #[must_use]
    pub const fn letter(self) -> Letter {
        match Letter::for_value(self.0) {
            Some(letter) => letter,
            None => unreachable!(),
        }
    }
}

impl Display for CalledNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.letter(), self.0)
    }
}

impl FromStr for CalledNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<u8> for CalledNumber {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ParseError::OutOfRange)
    }
}

impl From<CalledNumber> for u8 {
    fn from(number: CalledNumber) -> u8 {
        number.value()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(CalledNumber::new(1), Some(CalledNumber::MIN));
        assert_eq!(CalledNumber::new(75), Some(CalledNumber::MAX));
        assert_eq!(CalledNumber::new(0), None);
        assert_eq!(CalledNumber::new(76), None);
        assert_eq!(CalledNumber::try_from(0), Err(ParseError::OutOfRange));
        assert_eq!(u8::from(CalledNumber::from_value(9)), 9);
    }

    #[test]
    fn test_display() {
        assert_eq!(CalledNumber::from_value(1).to_string(), "B-1");
        assert_eq!(CalledNumber::from_value(30).to_string(), "I-30");
        assert_eq!(CalledNumber::from_value(75).to_string(), "O-75");
    }

    #[test]
    #[should_panic(expected = "Invalid bingo number: 0")]
    fn test_from_value_zero_panics() {
        let _ = CalledNumber::from_value(0);
    }

    proptest! {
        #[test]
        fn letter_range_contains_number(value in 1u8..=75) {
            let number = CalledNumber::from_value(value);
            prop_assert!(number.letter().range().contains(&value));
        }

        #[test]
        fn render_then_parse_round_trips(value in 1u8..=75) {
            let number = CalledNumber::from_value(value);
            prop_assert_eq!(number.to_string().parse::<CalledNumber>(), Ok(number));
        }
    }
}
