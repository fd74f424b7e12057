//! A set of bingo numbers, stored as a bitmask.
//!
//! Bit `n - 1` of the mask represents number `n`, so the whole board fits in a
//! single `u128`.

use std::{fmt, iter::FusedIterator};

use crate::CalledNumber;

/// A set of [`CalledNumber`]s.
///
/// Iteration is always in ascending order.
///
/// # Examples
///
/// ```
/// use bingo_core::{CalledNumber, NumberSet};
///
/// let mut set = NumberSet::new();
/// assert!(set.insert(CalledNumber::from_value(12)));
/// assert!(!set.insert(CalledNumber::from_value(12)));
///
/// assert_eq!(set.len(), 1);
/// assert!(set.contains(CalledNumber::from_value(12)));
/// ```
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberSet {
    bits: u128,
}

impl NumberSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(number: CalledNumber) -> u128 {
        1u128 << (number.value() - 1)
    }

    /// Returns `true` if the set contains `number`.
    #[must_use]
    pub const fn contains(self, number: CalledNumber) -> bool {
        self.bits & Self::bit(number) != 0
    }

    /// Adds `number`, returning `true` if it was not already present.
    pub fn insert(&mut self, number: CalledNumber) -> bool {
        let inserted = !self.contains(number);
        self.bits |= Self::bit(number);
        inserted
    }

    /// Removes `number`, returning `true` if it was present.
    pub fn remove(&mut self, number: CalledNumber) -> bool {
        let removed = self.contains(number);
        self.bits &= !Self::bit(number);
        removed
    }

    /// Removes every number from the set.
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set has no elements.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the elements of `self` not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns an ascending iterator over the elements.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl fmt::Debug for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(CalledNumber::value)).finish()
    }
}

impl FromIterator<CalledNumber> for NumberSet {
    fn from_iter<T: IntoIterator<Item = CalledNumber>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<CalledNumber> for NumberSet {
    fn extend<T: IntoIterator<Item = CalledNumber>>(&mut self, iter: T) {
        for number in iter {
            self.insert(number);
        }
    }
}

impl IntoIterator for NumberSet {
    type Item = CalledNumber;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over a [`NumberSet`].
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u128,
}

impl Iterator for Iter {
    type Item = CalledNumber;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(CalledNumber::from_value(index + 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(value: u8) -> CalledNumber {
        CalledNumber::from_value(value)
    }

    #[test]
    fn test_insert_remove() {
        let mut set = NumberSet::new();
        assert!(set.is_empty());
        assert!(set.insert(n(1)));
        assert!(set.insert(n(75)));
        assert!(!set.insert(n(75)));
        assert_eq!(set.len(), 2);
        assert!(set.contains(n(1)));
        assert!(set.contains(n(75)));
        assert!(!set.contains(n(2)));

        assert!(set.remove(n(1)));
        assert!(!set.remove(n(1)));
        assert_eq!(set.len(), 1);

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_iteration_order() {
        let set: NumberSet = [n(61), n(3), n(45), n(16)].into_iter().collect();
        let values: Vec<u8> = set.iter().map(CalledNumber::value).collect();
        assert_eq!(values, vec![3, 16, 45, 61]);
        assert_eq!(set.iter().len(), 4);
    }

    #[test]
    fn test_constants() {
        assert_eq!(NumberSet::EMPTY.len(), 0);
        assert_eq!(NumberSet::EMPTY, NumberSet::new());
    }

    #[test]
    fn test_operations() {
        let a: NumberSet = [n(1), n(2), n(3)].into_iter().collect();
        let b: NumberSet = [n(2), n(3), n(4)].into_iter().collect();
        assert_eq!(a.difference(b), NumberSet::from_iter([n(1)]));
    }

    #[test]
    fn test_debug_lists_values() {
        let set: NumberSet = [n(7), n(5)].into_iter().collect();
        assert_eq!(format!("{set:?}"), "{5, 7}");
    }
}
