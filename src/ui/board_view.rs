//! Board rendering for the Tic-Tac-Toe GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Mark, Pos, BOARD_SIZE};

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
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<[Pos; 3]>,
        last_move: Option<Pos>,
        accept_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y) - 8.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);

        for idx in 0..9 {
            let pos = Pos::from_index(idx);
            self.draw_mark(&painter, pos, board.get(pos));
        }

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        // Hover preview and click handling. Occupied cells still report
        // the click so the controller can raise its invalid-move notice.
        let mut clicked = None;
        if accept_input {
            if let Some(pointer) = response.hover_pos() {
                if let Some(pos) = self.screen_to_cell(pointer) {
                    if board.is_empty(pos) {
                        painter.rect_filled(
                            self.cell_rect(pos).shrink(4.0),
                            CornerRadius::same(4),
                            CELL_HOVER,
                        );
                    }
                    if response.clicked() {
                        clicked = Some(pos);
                    }
                }
            }
        }

        clicked
    }

    /// Draw the inner grid lines separating the nine cells
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let grid_len = BOARD_SIZE as f32 * self.cell_size;

        for i in 1..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + grid_len);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + grid_len, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw a single mark
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * MARK_RADIUS_RATIO;

        match mark {
            Mark::X => {
                let stroke = Stroke::new(MARK_STROKE_WIDTH, X_COLOR);
                let d = Vec2::new(radius, radius);
                painter.line_segment([center - d, center + d], stroke);
                let d = Vec2::new(radius, -radius);
                painter.line_segment([center - d, center + d], stroke);
            }
            Mark::O => {
                painter.circle_stroke(center, radius, Stroke::new(MARK_STROKE_WIDTH, O_COLOR));
            }
            Mark::Empty => {}
        }
    }

    /// Draw a small dot marking the most recent move
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos);
        let marker = Pos2::new(rect.max.x - 10.0, rect.min.y + 10.0);
        painter.circle_filled(marker, 4.0, LAST_MOVE_MARKER);
    }

    /// Strike through the winning line
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 3]) {
        let stroke = Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT);
        painter.line_segment([self.cell_center(line[0]), self.cell_center(line[2])], stroke);
    }

    /// Convert screen coordinates to a cell, rejecting points off the grid.
    ///
    /// This is the gate that keeps out-of-range input away from the core:
    /// anything outside the nine cells maps to `None`.
    pub fn screen_to_cell(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if relative.x < BOARD_MARGIN || relative.y < BOARD_MARGIN || !Pos::is_valid(row, col) {
            return None;
        }
        Some(Pos::new(row as u8, col as u8))
    }

    /// Rectangle covering a cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Center point of a cell
    fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
