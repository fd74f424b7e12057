use eframe::egui::{CentralPanel, Context, TopBottomPanel, Vec2};
use egui_extras::{Size, StripBuilder};

use super::{board, status_line, toolbar};
use crate::{
    action::ActionRequestQueue,
    state::InputField,
    ui::{board::BoardViewModel, status_line::StatusLineViewModel, toolbar::ToolbarViewModel},
};

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel {
    pub(crate) toolbar_vm: ToolbarViewModel,
    pub(crate) status_line_vm: StatusLineViewModel,
    pub(crate) board_vm: BoardViewModel,
}

impl GameScreenViewModel {
    #[must_use]
    pub(crate) fn new(
        toolbar_vm: ToolbarViewModel,
        status_line_vm: StatusLineViewModel,
        board_vm: BoardViewModel,
    ) -> Self {
        Self {
            toolbar_vm,
            status_line_vm,
            board_vm,
        }
    }
}

pub(crate) fn show(
    ctx: &Context,
    vm: &GameScreenViewModel,
    input: &mut InputField,
    action_queue: &mut ActionRequestQueue,
) {
    TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_space(4.0);
        toolbar::show(ui, &vm.toolbar_vm, input, action_queue);
        ui.add_space(4.0);
    });

    TopBottomPanel::bottom("status_line").show(ctx, |ui| {
        status_line::show(ui, &vm.status_line_vm);
    });

    CentralPanel::default().show(ctx, |ui| {
        let spacing = ui.spacing().item_spacing;
        let cell_size = board::cell_size_for(ui.available_size() - spacing * 2.0);
        let board_size = Vec2::new(board::BOARD_COLUMNS, board::BOARD_ROWS) * cell_size;

        StripBuilder::new(ui)
            .size(Size::remainder())
            .size(Size::exact(board_size.x))
            .size(Size::remainder())
            .horizontal(|mut strip| {
                strip.empty();
                strip.cell(|ui| {
                    StripBuilder::new(ui)
                        .size(Size::remainder())
                        .size(Size::exact(board_size.y))
                        .size(Size::remainder())
                        .vertical(|mut strip| {
                            strip.empty();
                            strip.cell(|ui| {
                                board::show(ui, &vm.board_vm, cell_size, action_queue);
                            });
                            strip.empty();
                        });
                });
                strip.empty();
            });
    });
}
