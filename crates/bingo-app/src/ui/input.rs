use eframe::egui::{InputState, Key};

use crate::action::{Action, ActionRequestQueue, ModalKind};

struct Trigger {
    key: Key,
    command: bool,
    shift: bool,
}

impl Trigger {
    const fn matches(&self, i: &InputState) -> bool {
        i.modifiers.command == self.command && i.modifiers.shift == self.shift
    }
}

struct Shortcut {
    trigger: Trigger,
    action: Action,
}

impl Shortcut {
    const fn command(key: Key, action: Action) -> Self {
        Self {
            trigger: Trigger {
                key,
                command: true,
                shift: false,
            },
            action,
        }
    }

    const fn command_shift(key: Key, action: Action) -> Self {
        Self {
            trigger: Trigger {
                key,
                command: true,
                shift: true,
            },
            action,
        }
    }
}

const SHORTCUTS: [Shortcut; 2] = [
    Shortcut::command_shift(Key::Backspace, Action::OpenModal(ModalKind::ClearConfirm)),
    Shortcut::command(Key::Z, Action::Undo),
];

/// Whether keyboard shortcuts should run this frame.
///
/// Shortcuts are off while a modal is open, and while the number field has
/// keyboard focus and holds text so that its own editing keys keep working.
#[must_use]
pub(crate) fn shortcuts_enabled(
    active_modal: Option<ModalKind>,
    wants_keyboard_input: bool,
    input_text_empty: bool,
) -> bool {
    active_modal.is_none() && (!wants_keyboard_input || input_text_empty)
}

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // `i.modifiers.command` is Ctrl on Windows/Linux and Cmd on Mac.
    for shortcut in SHORTCUTS {
        if i.key_pressed(shortcut.trigger.key) && shortcut.trigger.matches(i) {
            action_queue.request(shortcut.action);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{Event, InputState, Key, Modifiers};

    use super::{handle_input, shortcuts_enabled};
    use crate::action::{Action, ActionRequestQueue, ModalKind};

    fn actions_for(key: Key, modifiers: Modifiers) -> Vec<Action> {
        let mut input = InputState::default();
        input.modifiers = modifiers;
        input.events.push(Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        });
        let mut queue = ActionRequestQueue::default();
        handle_input(&input, &mut queue);
        queue.take_all()
    }

    #[test]
    fn command_z_requests_undo() {
        assert_eq!(actions_for(Key::Z, Modifiers::COMMAND), vec![Action::Undo]);
    }

    #[test]
    fn command_shift_backspace_opens_clear_confirm() {
        assert_eq!(
            actions_for(Key::Backspace, Modifiers::COMMAND.plus(Modifiers::SHIFT)),
            vec![Action::OpenModal(ModalKind::ClearConfirm)]
        );
    }

    #[test]
    fn keys_without_exact_modifiers_do_nothing() {
        assert!(actions_for(Key::Z, Modifiers::NONE).is_empty());
        assert!(actions_for(Key::Z, Modifiers::SHIFT).is_empty());
        assert!(actions_for(Key::Z, Modifiers::COMMAND.plus(Modifiers::SHIFT)).is_empty());
        assert!(actions_for(Key::Backspace, Modifiers::NONE).is_empty());
        assert!(actions_for(Key::Backspace, Modifiers::COMMAND).is_empty());
    }

    #[test]
    fn shortcuts_are_disabled_while_modal_is_open() {
        let modal = Some(ModalKind::ClearConfirm);
        assert!(!shortcuts_enabled(modal, false, true));
        assert!(!shortcuts_enabled(modal, true, true));
        assert!(!shortcuts_enabled(modal, false, false));
    }

    #[test]
    fn shortcuts_yield_to_text_being_edited() {
        assert!(!shortcuts_enabled(None, true, false));
        assert!(shortcuts_enabled(None, true, true));
        assert!(shortcuts_enabled(None, false, false));
        assert!(shortcuts_enabled(None, false, true));
    }
}
