//! Durable snapshot of a [`Ledger`].
//!
//! The snapshot is a JSON object with two integer arrays:
//!
//! ```json
//! {"calledNumbers": [5, 12, 20], "history": [20, 5, 12]}
//! ```
//!
//! `history` is newest-first. Decoding never fails: anything that cannot be
//! understood is treated as empty, so a damaged record degrades to a fresh
//! game instead of an error.

use bingo_core::{CalledNumber, NumberSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Ledger;

/// Serializable form of a [`Ledger`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    called_numbers: Vec<CalledNumber>,
    history: Vec<CalledNumber>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotDto {
    called_numbers: Vec<u8>,
    history: Vec<u8>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshotDto {
    #[serde(default)]
    called_numbers: Value,
    #[serde(default)]
    history: Value,
}

impl Snapshot {
    /// Captures the current state of `ledger`.
    #[must_use]
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            called_numbers: ledger.called().iter().collect(),
            history: ledger.history().collect(),
        }
    }

    /// Decodes a snapshot from JSON.
    ///
    /// A record that is not a JSON object decodes as empty. Each field is
    /// checked on its own: a field that is missing, or is not an array made
    /// only of integers in 1-75, decodes as empty while the other field is
    /// kept.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        let value = match serde_json::from_str::<Value>(raw) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("discarding unreadable snapshot: {err}");
                return Self::default();
            }
        };
        // Struct deserialization also accepts sequences; only objects are records.
        if !value.is_object() {
            log::warn!("discarding snapshot that is not a JSON object");
            return Self::default();
        }
        let dto = match RawSnapshotDto::deserialize(value) {
            Ok(dto) => dto,
            Err(err) => {
                log::warn!("discarding unreadable snapshot: {err}");
                return Self::default();
            }
        };
        Self {
            called_numbers: number_list(&dto.called_numbers, "calledNumbers"),
            history: number_list(&dto.history, "history"),
        }
    }

    /// Encodes the snapshot as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let dto = SnapshotDto {
            called_numbers: self.called_numbers.iter().copied().map(u8::from).collect(),
            history: self.history.iter().copied().map(u8::from).collect(),
        };
        serde_json::to_string(&dto)
    }

    /// Rebuilds a ledger from this snapshot.
    ///
    /// The history is taken in order (repeats keep their newest entry). The
    /// called set is the union of both fields; numbers listed only in
    /// `calledNumbers` are placed at the oldest end of the history, ascending,
    /// so every called number still has a history entry.
    #[must_use]
    pub fn into_ledger(self) -> Ledger {
        let mut ledger = Ledger::from_history(self.history);
        let missing = NumberSet::from_iter(self.called_numbers).difference(ledger.called());
        if !missing.is_empty() {
            log::debug!("snapshot lists {} calls missing from history", missing.len());
        }
        for number in missing {
            ledger.push_oldest(number);
        }
        ledger
    }
}

fn number_list(value: &Value, field: &str) -> Vec<CalledNumber> {
    if value.is_null() {
        return vec![];
    }
    let parsed = value.as_array().and_then(|items| {
        items
            .iter()
            .map(|item| {
                item.as_u64()
                    .and_then(|v| u8::try_from(v).ok())
                    .and_then(|v| CalledNumber::try_from(v).ok())
            })
            .collect::<Option<Vec<_>>>()
    });
    parsed.unwrap_or_else(|| {
        log::warn!("ignoring malformed snapshot field `{field}`");
        vec![]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(value: u8) -> CalledNumber {
        CalledNumber::from_value(value)
    }

    fn history(ledger: &Ledger) -> Vec<u8> {
        ledger.history().map(CalledNumber::value).collect()
    }

    #[test]
    fn test_encode_format() {
        let ledger = Ledger::from_history([n(20), n(5), n(12)]);
        let json = Snapshot::from_ledger(&ledger).to_json().unwrap();
        assert_eq!(json, r#"{"calledNumbers":[5,12,20],"history":[20,5,12]}"#);
    }

    #[test]
    fn test_save_then_restore_reproduces_ledger() {
        let mut ledger = Ledger::new();
        for value in [33, 1, 75, 48] {
            ledger.add(n(value)).unwrap();
        }
        let json = Snapshot::from_ledger(&ledger).to_json().unwrap();
        assert_eq!(Snapshot::from_json(&json).into_ledger(), ledger);
    }

    #[test]
    fn test_unreadable_records_restore_empty() {
        for raw in [
            "",
            "not json",
            "[1,2,3]",
            "[[5],[20,5]]",
            "[[], [1]]",
            "42",
            "null",
            r#""text""#,
            "{",
        ] {
            assert_eq!(Snapshot::from_json(raw).into_ledger(), Ledger::new(), "{raw:?}");
        }
    }

    #[test]
    fn test_missing_fields_restore_empty() {
        assert_eq!(Snapshot::from_json("{}").into_ledger(), Ledger::new());
    }

    #[test]
    fn test_malformed_field_is_ignored_independently() {
        let ledger = Snapshot::from_json(r#"{"calledNumbers": "oops", "history": [3, 2]}"#)
            .into_ledger();
        assert_eq!(history(&ledger), vec![3, 2]);

        let ledger =
            Snapshot::from_json(r#"{"calledNumbers": [7], "history": [1, "two"]}"#).into_ledger();
        assert_eq!(history(&ledger), vec![7]);

        let ledger = Snapshot::from_json(r#"{"calledNumbers": [], "history": [1, 76]}"#)
            .into_ledger();
        assert!(ledger.is_empty());

        let ledger = Snapshot::from_json(r#"{"calledNumbers": [], "history": [1.5]}"#)
            .into_ledger();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_history_missing_from_called_numbers_self_heals() {
        let ledger =
            Snapshot::from_json(r#"{"calledNumbers": [5], "history": [20, 5]}"#).into_ledger();
        assert_eq!(history(&ledger), vec![20, 5]);
        assert!(ledger.is_called(n(20)));
    }

    #[test]
    fn test_called_numbers_missing_from_history_self_heal() {
        let ledger =
            Snapshot::from_json(r#"{"calledNumbers": [61, 2, 40], "history": [40]}"#).into_ledger();
        assert_eq!(history(&ledger), vec![40, 2, 61]);
        assert_eq!(ledger.called().len(), ledger.len());
    }

    #[test]
    fn test_repeated_history_entries_keep_newest() {
        let ledger =
            Snapshot::from_json(r#"{"calledNumbers": [], "history": [8, 9, 8]}"#).into_ledger();
        assert_eq!(history(&ledger), vec![8, 9]);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let ledger =
            Snapshot::from_json(r#"{"version": 2, "calledNumbers": [1], "history": [1]}"#)
                .into_ledger();
        assert_eq!(history(&ledger), vec![1]);
    }
}
