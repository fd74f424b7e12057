use bingo_core::CalledNumber;

use crate::{
    action::{Action, ActionRequestQueue},
    state::{AppState, UiState},
};

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    match action {
        Action::SubmitInput(raw) => submit_input(app_state, ui_state, &raw),
        Action::CallNumber(number) => call_number(app_state, ui_state, number),
        Action::Undo => {
            ui_state.status = None;
            app_state.session.undo();
        }
        Action::OpenModal(kind) => ui_state.active_modal = Some(kind),
        Action::CloseModal => ui_state.active_modal = None,
        Action::ClearBoard => {
            ui_state.status = None;
            ui_state.active_modal = None;
            app_state.session.clear();
        }
    }
}

fn submit_input(app_state: &mut AppState, ui_state: &mut UiState, raw: &str) {
    // Blank submissions are ignored rather than reported.
    if raw.trim().is_empty() {
        return;
    }
    ui_state.input.text.clear();
    ui_state.input.focus_requested = true;
    ui_state.status = app_state.session.submit(raw).err();
}

fn call_number(app_state: &mut AppState, ui_state: &mut UiState, number: CalledNumber) {
    ui_state.status = app_state.session.call(number).err().map(Into::into);
}
