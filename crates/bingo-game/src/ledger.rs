use std::collections::VecDeque;

use bingo_core::{CalledNumber, NumberSet};

/// Signal returned by [`Ledger::add`] when the number was already called.
///
/// This is informational: the ledger is left unchanged and the number stays
/// called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{number} was already called.")]
pub struct DuplicateCall {
    /// The number that was called again.
    pub number: CalledNumber,
}

/// The set of called numbers together with the order they were called in.
///
/// The history is kept newest-first. Every called number appears exactly once
/// in the history, and the history holds nothing else.
///
/// All transitions are atomic: a method either applies completely or leaves
/// the ledger untouched.
///
/// # Example
///
/// ```
/// use bingo_core::CalledNumber;
/// use bingo_game::Ledger;
///
/// let n = CalledNumber::from_value;
///
/// let mut ledger = Ledger::new();
/// ledger.add(n(5)).unwrap();
/// ledger.add(n(20)).unwrap();
/// assert_eq!(ledger.undo(), Some(n(20)));
///
/// assert!(ledger.is_called(n(5)));
/// assert_eq!(ledger.history().collect::<Vec<_>>(), vec![n(5)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    called: NumberSet,
    history: VecDeque<CalledNumber>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from a newest-first history.
    ///
    /// Repeated entries keep only their first (newest) occurrence.
    #[must_use]
    pub fn from_history<I>(history: I) -> Self
    where
        I: IntoIterator<Item = CalledNumber>,
    {
        let mut ledger = Self::new();
        for number in history {
            ledger.push_oldest(number);
        }
        ledger
    }

    /// Appends `number` at the oldest end of the history unless already called.
    pub(crate) fn push_oldest(&mut self, number: CalledNumber) {
        if self.called.insert(number) {
            self.history.push_back(number);
        }
    }

    /// Records a call of `number`.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateCall`] if `number` was already called. The ledger is
    /// not modified in that case.
    pub fn add(&mut self, number: CalledNumber) -> Result<(), DuplicateCall> {
        if !self.called.insert(number) {
            return Err(DuplicateCall { number });
        }
        self.history.push_front(number);
        Ok(())
    }

    /// Removes the most recent call and returns it.
    ///
    /// Returns `None` and does nothing if nothing has been called.
    pub fn undo(&mut self) -> Option<CalledNumber> {
        let number = self.history.pop_front()?;
        self.called.remove(number);
        Some(number)
    }

    /// Forgets every call.
    pub fn clear(&mut self) {
        self.called.clear();
        self.history.clear();
    }

    /// Returns up to `k` of the most recent calls, newest first.
    pub fn last_n(&self, k: usize) -> impl ExactSizeIterator<Item = CalledNumber> + '_ {
        self.history.iter().take(k).copied()
    }

    /// Returns the full call history, newest first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = CalledNumber> + ExactSizeIterator + '_ {
        self.history.iter().copied()
    }

    /// Returns the most recent call, if any.
    #[must_use]
    pub fn latest(&self) -> Option<CalledNumber> {
        self.history.front().copied()
    }

    /// Returns the set of called numbers.
    #[must_use]
    pub fn called(&self) -> NumberSet {
        self.called
    }

    /// Returns `true` if `number` has been called.
    #[must_use]
    pub fn is_called(&self, number: CalledNumber) -> bool {
        self.called.contains(number)
    }

    /// Returns the number of calls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Returns `true` if nothing has been called.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Returns `true` if there is a call to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.is_empty()
    }
}
