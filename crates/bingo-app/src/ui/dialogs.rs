use eframe::egui::{Context, Id, Modal, Response, RichText, Sides, Ui};

use crate::action::{Action, ActionRequestQueue};

#[derive(Debug, Clone)]
pub(crate) struct ClearConfirmViewModel {
    called_count: usize,
}

impl ClearConfirmViewModel {
    #[must_use]
    pub(crate) fn new(called_count: usize) -> Self {
        Self { called_count }
    }

    #[must_use]
    pub(crate) fn body(&self) -> String {
        let plural = if self.called_count == 1 { "" } else { "s" };
        format!(
            "This will remove {} called number{plural} from the history. This action cannot be undone.",
            self.called_count
        )
    }
}

struct DialogResult {
    should_close: bool,
}

fn show_dialog<Heading, Body, Buttons>(
    ctx: &Context,
    id: Id,
    heading: Heading,
    body: Body,
    buttons: Buttons,
) -> DialogResult
where
    Heading: Into<RichText>,
    Body: FnOnce(&mut Ui),
    Buttons: FnOnce(&mut Ui),
{
    let modal = Modal::new(id).show(ctx, |ui| {
        ui.heading(heading);
        ui.add_space(4.0);

        body(ui);
        ui.add_space(8.0);

        Sides::new().show(ui, |_ui| {}, buttons);
    });

    DialogResult {
        should_close: modal.should_close(),
    }
}

fn request_focus_if_none(ui: &Ui, response: &Response) {
    if ui.memory(|memory| memory.focused().is_none()) {
        response.request_focus();
    }
}

pub(crate) fn show_clear_confirm(
    ctx: &Context,
    vm: &ClearConfirmViewModel,
    action_queue: &mut ActionRequestQueue,
) {
    let result = show_dialog(
        ctx,
        Id::new("clear_confirm"),
        "Clear all called numbers?",
        |ui| {
            ui.label(vm.body());
        },
        |ui| {
            // Right-to-left: the safe choice sits outermost and takes focus.
            let keep = ui.button("Keep numbers");
            request_focus_if_none(ui, &keep);
            if keep.clicked() {
                ui.close();
            }
            let clear = ui.button(
                RichText::new("Clear history").color(ui.visuals().error_fg_color),
            );
            if clear.clicked() {
                action_queue.request(Action::ClearBoard);
                ui.close();
            }
        },
    );

    if result.should_close {
        action_queue.request(Action::CloseModal);
    }
}
