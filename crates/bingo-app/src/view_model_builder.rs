use bingo_core::Letter;
use bingo_game::Ledger;

use crate::{
    RECENT_CALLS_LEN,
    state::{AppState, UiState},
    ui::{
        board::{BoardCell, BoardColumn, BoardViewModel, CellVisualState},
        dialogs::ClearConfirmViewModel,
        game_screen::GameScreenViewModel,
        status_line::{StatusLineViewModel, StatusMessage},
        toolbar::ToolbarViewModel,
    },
};

#[must_use]
pub(crate) fn build_toolbar_vm(app_state: &AppState) -> ToolbarViewModel {
    let ledger = app_state.ledger();
    ToolbarViewModel::new(ledger.last_n(RECENT_CALLS_LEN).collect(), ledger.can_undo())
}

#[must_use]
pub(crate) fn build_status_line_vm(app_state: &AppState, ui_state: &UiState) -> StatusLineViewModel {
    let message = match &ui_state.status {
        Some(err) => StatusMessage::Error(err.to_string()),
        None => StatusMessage::Idle,
    };
    StatusLineViewModel::new(message, app_state.ledger().len())
}

fn build_board(ledger: &Ledger) -> Vec<BoardColumn> {
    let latest = ledger.latest();
    Letter::ALL
        .into_iter()
        .map(|letter| {
            let cells = letter
                .numbers()
                .map(|number| {
                    let mut visual_state = CellVisualState::empty();
                    if ledger.is_called(number) {
                        visual_state |= CellVisualState::CALLED;
                    }
                    if latest == Some(number) {
                        visual_state |= CellVisualState::LATEST;
                    }
                    BoardCell {
                        number,
                        visual_state,
                    }
                })
                .collect();
            BoardColumn { letter, cells }
        })
        .collect()
}

#[must_use]
pub(crate) fn build_board_vm(app_state: &AppState) -> BoardViewModel {
    BoardViewModel::new(build_board(app_state.ledger()))
}

#[must_use]
pub(crate) fn build_game_screen_vm(app_state: &AppState, ui_state: &UiState) -> GameScreenViewModel {
    GameScreenViewModel::new(
        build_toolbar_vm(app_state),
        build_status_line_vm(app_state, ui_state),
        build_board_vm(app_state),
    )
}

#[must_use]
pub(crate) fn build_clear_confirm_vm(app_state: &AppState) -> ClearConfirmViewModel {
    ClearConfirmViewModel::new(app_state.ledger().len())
}
