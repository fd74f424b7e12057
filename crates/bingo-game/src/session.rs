use bingo_core::{CalledNumber, ParseError, parse};

use crate::{DuplicateCall, Ledger, Snapshot, SnapshotStore};

/// Reasons a submitted call was not recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CallError {
    /// The input could not be understood as a bingo number.
    #[display("{_0}")]
    Parse(ParseError),
    /// The number had already been called.
    #[display("{_0}")]
    Duplicate(DuplicateCall),
}

/// A [`Ledger`] bound to the store it is persisted in.
///
/// The store is injected at construction. After every transition that changes
/// the ledger, the session writes a fresh [`Snapshot`]. Storage failures are
/// logged and otherwise ignored, so the game keeps going in memory.
#[derive(Debug)]
pub struct Session<S> {
    ledger: Ledger,
    store: S,
}

impl<S> Session<S>
where
    S: SnapshotStore,
{
    /// Creates a session, restoring whatever `store` holds.
    ///
    /// Missing, unreadable or malformed snapshots start an empty ledger.
    pub fn restore(store: S) -> Self {
        let ledger = match store.load() {
            Ok(Some(raw)) => Snapshot::from_json(&raw).into_ledger(),
            Ok(None) => Ledger::new(),
            Err(err) => {
                log::warn!("failed to load saved calls, starting empty: {err}");
                Ledger::new()
            }
        };
        log::info!("restored {} called numbers", ledger.len());
        Self { ledger, store }
    }

    /// Returns the current ledger.
    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parses operator input and records the call.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::Parse`] if the input is not a valid number and
    /// [`CallError::Duplicate`] if the number was already called. The ledger is
    /// unchanged in both cases.
    pub fn submit(&mut self, raw: &str) -> Result<CalledNumber, CallError> {
        let number = parse(raw)?;
        self.call(number)?;
        Ok(number)
    }

    /// Records a call of an already validated number.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateCall`] if `number` was already called.
    pub fn call(&mut self, number: CalledNumber) -> Result<(), DuplicateCall> {
        self.ledger.add(number)?;
        log::debug!("called {number}");
        self.persist();
        Ok(())
    }

    /// Removes the most recent call, returning it.
    pub fn undo(&mut self) -> Option<CalledNumber> {
        let number = self.ledger.undo()?;
        log::debug!("undid {number}");
        self.persist();
        Some(number)
    }

    /// Forgets every call.
    pub fn clear(&mut self) {
        log::debug!("clearing {} calls", self.ledger.len());
        self.ledger.clear();
        self.persist();
    }

    fn persist(&mut self) {
        let json = match Snapshot::from_ledger(&self.ledger).to_json() {
            Ok(json) => json,
            Err(err) => {
                log::warn!("failed to encode snapshot: {err}");
                return;
            }
        };
        if let Err(err) = self.store.save(&json) {
            log::warn!("failed to save snapshot, continuing in memory: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use bingo_core::Letter;

    use super::*;
    use crate::{MemoryStore, StoreError};

    fn n(value: u8) -> CalledNumber {
        CalledNumber::from_value(value)
    }

    #[derive(Debug, Default)]
    struct BrokenStore {
        save_attempts: usize,
    }

    impl SnapshotStore for BrokenStore {
        fn load(&self) -> Result<Option<String>, StoreError> {
            Err(StoreError::unavailable("broken"))
        }

        fn save(&mut self, _snapshot: &str) -> Result<(), StoreError> {
            self.save_attempts += 1;
            Err(StoreError::unavailable("broken"))
        }
    }

    #[test]
    fn test_submit_scenarios() {
        let mut session = Session::restore(MemoryStore::new());

        assert_eq!(session.submit("B12"), Ok(n(12)));
        assert_eq!(session.submit("g60"), Ok(n(60)));
        assert_eq!(
            session.submit("B16"),
            Err(CallError::Parse(ParseError::LetterMismatch {
                letter: Letter::B,
                number: n(16),
            }))
        );
        assert_eq!(
            session.submit("0"),
            Err(CallError::Parse(ParseError::OutOfRange))
        );
        assert_eq!(session.submit(""), Err(CallError::Parse(ParseError::Empty)));
        assert_eq!(
            session.submit("12"),
            Err(CallError::Duplicate(DuplicateCall { number: n(12) }))
        );

        let history: Vec<u8> = session.ledger().history().map(CalledNumber::value).collect();
        assert_eq!(history, vec![60, 12]);
    }

    #[test]
    fn test_each_change_is_saved() {
        let mut session = Session::restore(MemoryStore::new());
        assert_eq!(session.store().snapshot(), None);

        session.call(n(5)).unwrap();
        session.call(n(20)).unwrap();
        assert_eq!(
            session.store().snapshot(),
            Some(r#"{"calledNumbers":[5,20],"history":[20,5]}"#)
        );

        assert_eq!(session.undo(), Some(n(20)));
        assert_eq!(
            session.store().snapshot(),
            Some(r#"{"calledNumbers":[5],"history":[5]}"#)
        );

        session.clear();
        assert_eq!(
            session.store().snapshot(),
            Some(r#"{"calledNumbers":[],"history":[]}"#)
        );
    }

    #[test]
    fn test_rejected_calls_are_not_saved() {
        let mut session = Session::restore(MemoryStore::new());
        session.call(n(7)).unwrap();
        let saved = session.store().snapshot().map(str::to_owned);

        assert!(session.submit("7").is_err());
        assert!(session.submit("nope").is_err());
        assert_eq!(session.store().snapshot().map(str::to_owned), saved);
    }

    #[test]
    fn test_restore_from_saved_snapshot() {
        let store = MemoryStore::with_snapshot(r#"{"calledNumbers":[5,20],"history":[20,5]}"#);
        let mut session = Session::restore(store);
        assert_eq!(session.ledger().latest(), Some(n(20)));
        assert_eq!(session.undo(), Some(n(20)));
        assert_eq!(session.undo(), Some(n(5)));
    }

    #[test]
    fn test_restore_from_garbage_starts_empty() {
        let session = Session::restore(MemoryStore::with_snapshot("{{{"));
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_storage_failures_do_not_interrupt_play() {
        let mut session = Session::restore(BrokenStore::default());
        assert!(session.ledger().is_empty());

        assert_eq!(session.submit("N31"), Ok(n(31)));
        assert_eq!(session.submit("32"), Ok(n(32)));
        assert_eq!(session.undo(), Some(n(32)));
        assert_eq!(session.store().save_attempts, 3);
        assert!(session.ledger().is_called(n(31)));
    }

    #[test]
    fn test_call_error_messages() {
        assert_eq!(
            CallError::from(DuplicateCall { number: n(12) }).to_string(),
            "B-12 was already called."
        );
        assert_eq!(
            CallError::from(ParseError::OutOfRange).to_string(),
            "Number must be 1–75."
        );
    }
}
