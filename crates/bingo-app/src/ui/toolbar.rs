use bingo_core::CalledNumber;
use eframe::egui::{
    Align, Button, Frame, Key, Layout, Margin, RichText, TextEdit, Ui, Widget as _,
};

use crate::{
    RECENT_CALLS_LEN,
    action::{Action, ActionRequestQueue, ModalKind},
    state::InputField,
};

const INPUT_HINT: &str = "e.g., 12 or B12";
const INPUT_WIDTH: f32 = 120.0;
const CHIP_NUMBER_SIZE: f32 = 20.0;

#[derive(Debug, Clone)]
pub(crate) struct ToolbarViewModel {
    recent: Vec<CalledNumber>,
    can_undo: bool,
}

impl ToolbarViewModel {
    #[must_use]
    pub(crate) fn new(recent: Vec<CalledNumber>, can_undo: bool) -> Self {
        Self { recent, can_undo }
    }

    #[must_use]
    pub(crate) fn recent(&self) -> &[CalledNumber] {
        &self.recent
    }

    #[must_use]
    pub(crate) fn can_undo(&self) -> bool {
        self.can_undo
    }
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &ToolbarViewModel,
    input: &mut InputField,
    action_queue: &mut ActionRequestQueue,
) {
    ui.horizontal(|ui| {
        show_recent(ui, vm.recent());

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui
                .button("Clear Board")
                .on_hover_text("Clear all called numbers (Ctrl+Shift+Backspace)")
                .clicked()
            {
                action_queue.request(Action::OpenModal(ModalKind::ClearConfirm));
            }
            if ui
                .add_enabled(vm.can_undo(), Button::new("Undo"))
                .on_hover_text("Remove the most recent call (Ctrl+Z)")
                .clicked()
            {
                action_queue.request(Action::Undo);
            }
            let add_clicked = ui.button("Add").clicked();

            let response = TextEdit::singleline(&mut input.text)
                .hint_text(INPUT_HINT)
                .desired_width(INPUT_WIDTH)
                .ui(ui);
            if input.focus_requested {
                response.request_focus();
                input.focus_requested = false;
            }
            let enter_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            if add_clicked || enter_pressed {
                action_queue.request(Action::SubmitInput(input.text.clone()));
            }
        });
    });
}

fn show_recent(ui: &mut Ui, recent: &[CalledNumber]) {
    ui.label(RichText::new(format!("Last {RECENT_CALLS_LEN}:")).strong());
    if recent.is_empty() {
        ui.weak("\u{2014}");
        return;
    }
    for &number in recent {
        Frame::group(ui.style())
            .inner_margin(Margin::symmetric(8, 2))
            .show(ui, |ui| {
                ui.weak(number.letter().to_string());
                ui.label(
                    RichText::new(number.value().to_string())
                        .strong()
                        .size(CHIP_NUMBER_SIZE),
                );
            })
            .response
            .on_hover_text(format!("Called {number}"));
    }
}
