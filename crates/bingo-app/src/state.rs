use bingo_game::{CallError, Ledger, Session, SnapshotStore};

use crate::action::ModalKind;

pub(crate) type BoxedStore = Box<dyn SnapshotStore>;

// AppState holds the game session. The session persists itself after every change.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) session: Session<BoxedStore>,
}

impl AppState {
    #[must_use]
    pub(crate) fn restore(store: BoxedStore) -> Self {
        Self {
            session: Session::restore(store),
        }
    }

    #[must_use]
    pub(crate) fn ledger(&self) -> &Ledger {
        self.session.ledger()
    }
}

// UiState holds ephemeral UI-only state (input field, status, modal). It is not persisted.
#[derive(Debug)]
pub(crate) struct UiState {
    pub(crate) input: InputField,
    pub(crate) status: Option<CallError>,
    pub(crate) active_modal: Option<ModalKind>,
}

impl UiState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            input: InputField {
                text: String::new(),
                focus_requested: true,
            },
            status: None,
            active_modal: None,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct InputField {
    pub(crate) text: String,
    pub(crate) focus_requested: bool,
}
