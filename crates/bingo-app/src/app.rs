//! Bingo Caller application UI.
//!
//! # Design Notes
//! - One screen: recent calls and input on top, the 75-number board in the
//!   middle, the status line at the bottom.
//! - Every ledger change is saved by the session itself, so the app keeps no
//!   dirty flag and does not rely on eframe's auto-save.
//! - Clearing always goes through the confirmation dialog.

use eframe::{App, CreationContext, Frame, egui::Context};

use crate::{
    APP_NAME,
    action::{ActionRequestQueue, ModalKind},
    action_handler, persistence,
    state::{AppState, BoxedStore, UiState},
    ui,
    version::BuildInfo,
    view_model_builder,
};

#[derive(Debug)]
pub struct BingoApp {
    app_state: AppState,
    ui_state: UiState,
}

impl BingoApp {
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        log::info!("starting {} {}", APP_NAME, BuildInfo::current());
        Self::with_store(persistence::open_store())
    }

    fn with_store(store: BoxedStore) -> Self {
        Self {
            app_state: AppState::restore(store),
            ui_state: UiState::new(),
        }
    }

    fn accepts_shortcuts(&self, ctx: &Context) -> bool {
        ui::input::shortcuts_enabled(
            self.ui_state.active_modal,
            ctx.wants_keyboard_input(),
            self.ui_state.input.text.is_empty(),
        )
    }
}

impl App for BingoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        if self.accepts_shortcuts(ctx) {
            ctx.input(|i| ui::input::handle_input(i, &mut action_queue));
            action_handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);
        }

        let game_screen_vm =
            view_model_builder::build_game_screen_vm(&self.app_state, &self.ui_state);
        ui::game_screen::show(
            ctx,
            &game_screen_vm,
            &mut self.ui_state.input,
            &mut action_queue,
        );

        if let Some(modal) = self.ui_state.active_modal {
            match modal {
                ModalKind::ClearConfirm => {
                    let vm = view_model_builder::build_clear_confirm_vm(&self.app_state);
                    ui::dialogs::show_clear_confirm(ctx, &vm, &mut action_queue);
                }
            }
        }

        action_handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);
    }
}
