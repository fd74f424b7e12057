use eframe::egui::{Color32, Visuals};

/// Color palette for the called-numbers board.
///
/// Derived from the current `egui::Visuals` so the board follows the
/// light/dark theme of the rest of the UI.
#[derive(Debug, Clone)]
pub(crate) struct BoardPalette {
    pub(crate) header_bg: Color32,
    pub(crate) header_text: Color32,

    pub(crate) cell_bg_default: Color32,
    pub(crate) cell_bg_called: Color32,
    pub(crate) cell_bg_hovered: Color32,

    pub(crate) border_inactive: Color32,
    pub(crate) border_latest: Color32,

    pub(crate) text_normal: Color32,
    pub(crate) text_called: Color32,
}

impl BoardPalette {
    #[must_use]
    pub(crate) fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            header_bg: visuals.widgets.inactive.bg_fill,
            header_text: visuals.strong_text_color(),

            cell_bg_default: visuals.text_edit_bg_color(),
            cell_bg_called: visuals.selection.bg_fill,
            cell_bg_hovered: visuals.widgets.hovered.bg_fill,

            border_inactive: visuals.widgets.inactive.fg_stroke.color,
            border_latest: visuals.warn_fg_color,

            text_normal: visuals.weak_text_color(),
            text_called: visuals.strong_text_color(),
        }
    }
}
