use std::mem;

use bingo_core::CalledNumber;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    SubmitInput(String),
    CallNumber(CalledNumber),
    Undo,
    OpenModal(ModalKind),
    CloseModal,
    ClearBoard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModalKind {
    ClearConfirm,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue, ModalKind};

    #[test]
    fn take_all_returns_actions_in_order_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::Undo);
        queue.request(Action::OpenModal(ModalKind::ClearConfirm));

        let drained = queue.take_all();
        assert_eq!(
            drained,
            vec![Action::Undo, Action::OpenModal(ModalKind::ClearConfirm)]
        );

        assert!(queue.take_all().is_empty());
    }
}
