//! Board rendering for the Tic-Tac-Toe GUI

use crate::rules::WinLine;
use crate::{Board, Marker, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 120.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index, if any.
    ///
    /// Only empty cells are reported; clicks on taken cells are ignored.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Marker,
        last_move: Option<usize>,
        winning_line: Option<WinLine>,
        accepts_input: bool,
    ) -> Option<usize> {
        let available_size = ui.available_size();

        // Fit the board into the available space
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(120.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_markers(&painter, board);

        if let Some(idx) = last_move {
            self.draw_last_move_marker(&painter, idx);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        let mut clicked = None;

        if accepts_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(pos) = self.screen_to_board(pointer_pos) {
                    let idx = pos.to_index();
                    let is_valid = board.is_empty(idx);

                    self.draw_hover_preview(&painter, idx, current_turn, is_valid);

                    if response.clicked() && is_valid {
                        clicked = Some(idx);
                    }
                }
            }
        }

        clicked
    }

    /// Draw the two inner lines in each direction
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 1..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_markers(&self, painter: &Painter, board: &Board) {
        for (idx, cell) in board.cells().iter().enumerate() {
            if let Some(marker) = cell.marker() {
                self.draw_marker(painter, idx, marker, marker_color(marker));
            }
        }
    }

    /// Draw X as two strokes and O as a ring
    fn draw_marker(&self, painter: &Painter, idx: usize, marker: Marker, color: Color32) {
        let center = self.cell_center(idx);
        let radius = self.cell_size * MARKER_RADIUS_RATIO;
        let stroke = Stroke::new(MARKER_STROKE_WIDTH, color);

        match marker {
            Marker::X => {
                let d = Vec2::splat(radius);
                painter.line_segment([center - d, center + d], stroke);
                let d = Vec2::new(radius, -radius);
                painter.line_segment([center - d, center + d], stroke);
            }
            Marker::O => {
                painter.circle_stroke(center, radius, stroke);
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, idx: usize) {
        let corner = self.cell_rect(idx).right_top() + Vec2::new(-12.0, 12.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &WinLine) {
        let stroke = Stroke::new(6.0, WIN_HIGHLIGHT);
        painter.line_segment([self.cell_center(line[0]), self.cell_center(line[2])], stroke);
    }

    fn draw_hover_preview(&self, painter: &Painter, idx: usize, turn: Marker, is_valid: bool) {
        let rect = self.cell_rect(idx).shrink(6.0);
        if is_valid {
            painter.rect_filled(rect, CornerRadius::same(6), hover_valid());
            self.draw_marker(painter, idx, turn, marker_color(turn).gamma_multiply(0.35));
        } else {
            painter.rect_filled(rect, CornerRadius::same(6), hover_invalid());
        }
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    fn cell_rect(&self, idx: usize) -> Rect {
        let pos = Pos::from_index(idx);
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    fn cell_center(&self, idx: usize) -> Pos2 {
        self.cell_rect(idx).center()
    }
}

pub fn marker_color(marker: Marker) -> Color32 {
    match marker {
        Marker::X => X_COLOR,
        Marker::O => O_COLOR,
    }
}
