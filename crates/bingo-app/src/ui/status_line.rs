use bingo_core::CalledNumber;
use eframe::egui::{Align, Layout, RichText, Ui};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StatusMessage {
    Idle,
    Error(String),
}

#[derive(Debug, Clone)]
pub(crate) struct StatusLineViewModel {
    message: StatusMessage,
    called_count: usize,
}

impl StatusLineViewModel {
    #[must_use]
    pub(crate) fn new(message: StatusMessage, called_count: usize) -> Self {
        Self {
            message,
            called_count,
        }
    }

    #[must_use]
    pub(crate) fn message(&self) -> &StatusMessage {
        &self.message
    }

    #[must_use]
    pub(crate) fn called_count(&self) -> usize {
        self.called_count
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &StatusLineViewModel) {
    ui.horizontal(|ui| {
        match vm.message() {
            StatusMessage::Idle => {
                ui.weak("Enter a number or click the board to record a call.");
            }
            StatusMessage::Error(message) => {
                ui.label(RichText::new(message).color(ui.visuals().error_fg_color));
            }
        }
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(format!(
                "{} / {} called",
                vm.called_count(),
                CalledNumber::MAX.value()
            ));
        });
    });
}
