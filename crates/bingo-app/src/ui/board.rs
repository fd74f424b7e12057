use std::sync::Arc;

use bingo_core::{CalledNumber, Letter};
use eframe::egui::{Align2, Color32, FontId, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::board_theme::BoardPalette,
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct CellVisualState: u8 {
        const CALLED = 0b0000_0001;
        const LATEST = 0b0000_0010;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BoardCell {
    pub(crate) number: CalledNumber,
    pub(crate) visual_state: CellVisualState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BoardColumn {
    pub(crate) letter: Letter,
    pub(crate) cells: Vec<BoardCell>,
}

#[derive(Debug, Clone)]
pub(crate) struct BoardViewModel {
    columns: Vec<BoardColumn>,
}

impl BoardViewModel {
    #[must_use]
    pub(crate) fn new(columns: Vec<BoardColumn>) -> Self {
        Self { columns }
    }

    #[must_use]
    pub(crate) fn columns(&self) -> &[BoardColumn] {
        &self.columns
    }
}

pub(crate) const BOARD_COLUMNS: f32 = 5.0;
// One header row plus a full band of numbers.
pub(crate) const BOARD_ROWS: f32 = 16.0;

/// Largest square cell that fits the board into `available`.
#[must_use]
pub(crate) fn cell_size_for(available: Vec2) -> f32 {
    (available / Vec2::new(BOARD_COLUMNS, BOARD_ROWS)).min_elem().max(1.0)
}

const BORDER_WIDTH_RATIO: f32 = 0.03;
const LATEST_BORDER_WIDTH_RATIO: f32 = 3.0;

impl CellVisualState {
    fn fill_color(self, hovered: bool, palette: &BoardPalette) -> Color32 {
        if self.intersects(Self::CALLED) {
            return palette.cell_bg_called;
        }
        if hovered {
            return palette.cell_bg_hovered;
        }
        palette.cell_bg_default
    }

    fn text_color(self, palette: &BoardPalette) -> Color32 {
        if self.intersects(Self::CALLED) {
            palette.text_called
        } else {
            palette.text_normal
        }
    }

    fn border(self, palette: &BoardPalette, cell_size: f32) -> Stroke {
        let base_width = f32::max(cell_size * BORDER_WIDTH_RATIO, 1.0);
        if self.intersects(Self::LATEST) {
            Stroke::new(base_width * LATEST_BORDER_WIDTH_RATIO, palette.border_latest)
        } else {
            Stroke::new(base_width, palette.border_inactive)
        }
    }
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &BoardViewModel,
    cell_size: f32,
    action_queue: &mut ActionRequestQueue,
) {
    let style = Arc::clone(ui.style());
    let palette = BoardPalette::from_visuals(&style.visuals);

    let board_size = Vec2::new(BOARD_COLUMNS, BOARD_ROWS) * cell_size;
    let (rect, _response) = ui.allocate_exact_size(board_size, Sense::hover());
    let painter = ui.painter();
    let header_font = FontId::proportional(cell_size * 0.6);
    let number_font = FontId::proportional(cell_size * 0.45);
    let thin_border = Stroke::new(
        f32::max(cell_size * BORDER_WIDTH_RATIO, 1.0),
        palette.border_inactive,
    );

    for (x, column) in vm.columns().iter().enumerate() {
        #[expect(clippy::cast_precision_loss)]
        let xf = x as f32;
        let header_rect = Rect::from_min_size(
            rect.min + Vec2::new(xf * cell_size, 0.0),
            Vec2::splat(cell_size),
        );
        painter.rect_filled(header_rect, 0.0, palette.header_bg);
        painter.text(
            header_rect.center(),
            Align2::CENTER_CENTER,
            column.letter.as_char(),
            header_font.clone(),
            palette.header_text,
        );
        painter.rect_stroke(header_rect, 0.0, thin_border, StrokeKind::Inside);

        for (y, cell) in column.cells.iter().enumerate() {
            #[expect(clippy::cast_precision_loss)]
            let yf = (y + 1) as f32;
            let cell_rect = Rect::from_min_size(
                rect.min + Vec2::new(xf * cell_size, yf * cell_size),
                Vec2::splat(cell_size),
            );
            let number = cell.number;
            let response = ui
                .interact(cell_rect, ui.id().with(("board_cell", number.value())), Sense::click())
                .on_hover_text(hover_text(cell));

            let vs = cell.visual_state;
            painter.rect_filled(cell_rect, 0.0, vs.fill_color(response.hovered(), &palette));
            painter.text(
                cell_rect.center(),
                Align2::CENTER_CENTER,
                number.value(),
                number_font.clone(),
                vs.text_color(&palette),
            );
            painter.rect_stroke(
                cell_rect,
                0.0,
                vs.border(&palette, cell_size),
                StrokeKind::Inside,
            );

            if response.clicked() {
                action_queue.request(Action::CallNumber(number));
            }
        }
    }
}

fn hover_text(cell: &BoardCell) -> String {
    let status = if cell.visual_state.intersects(CellVisualState::LATEST) {
        "last called"
    } else if cell.visual_state.intersects(CellVisualState::CALLED) {
        "called"
    } else {
        "not called"
    };
    format!("{}: {status}", cell.number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(value: u8, visual_state: CellVisualState) -> BoardCell {
        BoardCell {
            number: CalledNumber::from_value(value),
            visual_state,
        }
    }

    #[test]
    fn cell_size_is_limited_by_the_tighter_axis() {
        assert!((cell_size_for(Vec2::new(500.0, 160.0)) - 10.0).abs() < f32::EPSILON);
        assert!((cell_size_for(Vec2::new(50.0, 1600.0)) - 10.0).abs() < f32::EPSILON);
        assert!((cell_size_for(Vec2::ZERO) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn hover_text_describes_call_state() {
        assert_eq!(hover_text(&cell(12, CellVisualState::empty())), "B-12: not called");
        assert_eq!(hover_text(&cell(33, CellVisualState::CALLED)), "N-33: called");
        assert_eq!(
            hover_text(&cell(75, CellVisualState::CALLED | CellVisualState::LATEST)),
            "O-75: last called"
        );
    }
}
