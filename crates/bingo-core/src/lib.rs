//! Core data types for bingo calling.
//!
//! This crate provides the small, pure building blocks shared by the ledger and
//! the application layer.
//!
//! # Overview
//!
//! - [`letter`]: The five letter ranges (B, I, N, G, O) and their numeric bands.
//! - [`called_number`]: A validated bingo number in the range 1-75.
//! - [`number_set`]: A compact set of called numbers.
//! - [`parse`]: Conversion of free-form operator input into a [`CalledNumber`].
//!
//! # Examples
//!
//! ```
//! use bingo_core::{CalledNumber, Letter};
//!
//! let number: CalledNumber = "b-12".parse().unwrap();
//! assert_eq!(number.value(), 12);
//! assert_eq!(number.letter(), Letter::B);
//! assert_eq!(number.to_string(), "B-12");
//! ```

pub mod called_number;
pub mod letter;
pub mod number_set;
pub mod parse;

pub use self::{
    called_number::CalledNumber,
    letter::Letter,
    number_set::NumberSet,
    parse::{ParseError, parse},
};
