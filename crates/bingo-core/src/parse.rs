//! Parsing of operator input into called numbers.
//!
//! The parser accepts a bare number (`"12"`) or a letter-prefixed number
//! (`"B12"`, `"b-12"`, `"B:12"`, `"G 60"`). Input is case-insensitive and all
//! whitespace is ignored.

use crate::{CalledNumber, Letter};

/// Errors returned by [`parse`].
///
/// The [`Display`](std::fmt::Display) output is a message suitable for showing
/// to the operator directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// The input was blank.
    #[display("Enter a number (e.g., 12 or B12).")]
    Empty,
    /// The input is neither a number nor a letter-prefixed number.
    #[display("Invalid format. Try \"B12\" or just \"12\".")]
    InvalidFormat,
    /// The number is outside 1-75.
    #[display("Number must be 1–75.")]
    OutOfRange,
    /// The number is valid but belongs to a different letter.
    #[display("{}-{} is out of range for {}.", letter, number.value(), letter)]
    LetterMismatch {
        /// The letter the operator typed.
        letter: Letter,
        /// The number the operator typed.
        number: CalledNumber,
    },
}

/// Parses operator input into a [`CalledNumber`].
///
/// Digit runs of any length are accepted syntactically and then checked
/// against 1-75, so `"007"` is 7 and `"1000"` is [`ParseError::OutOfRange`].
///
/// # Errors
///
/// - [`ParseError::Empty`] if the input contains only whitespace.
/// - [`ParseError::OutOfRange`] if the number is outside 1-75, with or without
///   a letter.
/// - [`ParseError::LetterMismatch`] if the letter does not own the number.
/// - [`ParseError::InvalidFormat`] for anything else.
///
/// # Examples
///
/// ```
/// use bingo_core::{CalledNumber, Letter, ParseError, parse};
///
/// assert_eq!(parse("B12"), Ok(CalledNumber::from_value(12)));
/// assert_eq!(parse(" g 60 "), Ok(CalledNumber::from_value(60)));
/// assert_eq!(
///     parse("B16"),
///     Err(ParseError::LetterMismatch {
///         letter: Letter::B,
///         number: CalledNumber::from_value(16),
///     })
/// );
/// assert_eq!(parse("0"), Err(ParseError::OutOfRange));
/// assert_eq!(parse(""), Err(ParseError::Empty));
/// ```
pub fn parse(raw: &str) -> Result<CalledNumber, ParseError> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut chars = normalized.chars();
    if let Some(letter) = chars.next().and_then(Letter::from_char) {
        let rest = chars.as_str();
        let digits = rest.strip_prefix(['-', ':']).unwrap_or(rest);
        if !is_digit_run(digits) {
            return Err(ParseError::InvalidFormat);
        }
        let number = parse_digits(digits)?;
        if number.letter() != letter {
            return Err(ParseError::LetterMismatch { letter, number });
        }
        return Ok(number);
    }

    if is_digit_run(&normalized) {
        return parse_digits(&normalized);
    }
    Err(ParseError::InvalidFormat)
}

fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

fn is_digit_run(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// `s` is a non-empty ASCII digit run, so the only possible failure is overflow.
fn parse_digits(s: &str) -> Result<CalledNumber, ParseError> {
    s.parse::<u8>()
        .ok()
        .and_then(CalledNumber::new)
        .ok_or(ParseError::OutOfRange)
}
