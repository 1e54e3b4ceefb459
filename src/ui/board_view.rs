//! Board rendering for the tic-tac-toe GUI

use crate::board::{Board, Mark, Pos, BOARD_SIZE};
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
            cell_size: 160.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any.
    ///
    /// `locked` suppresses hover previews and clicks (game over, or the
    /// computer is due to move).
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Mark,
        last_move: Option<Pos>,
        winning_line: Option<[Pos; 3]>,
        locked: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Square board fitted to the panel
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(160.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        // Draw board background
        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        // Draw grid lines
        self.draw_grid(&painter);

        // Draw placed marks
        self.draw_marks(&painter, board);

        // Draw last move marker
        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        // Draw winning line strike
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if !locked {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = crate::rules::is_legal_move(board, board_pos);
                    self.draw_hover_preview(&painter, board_pos, current_turn, is_valid);

                    if response.clicked() && is_valid {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the interior grid lines (two vertical, two horizontal)
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 1..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                match board.get(pos) {
                    Mark::X => self.draw_x(painter, pos, X_MARK),
                    Mark::O => self.draw_o(painter, pos, O_MARK),
                    Mark::Empty => {}
                }
            }
        }
    }

    /// Draw an X as two diagonal strokes
    fn draw_x(&self, painter: &Painter, pos: Pos, color: Color32) {
        let center = self.board_to_screen(pos);
        let half = self.cell_size * (0.5 - MARK_PAD_RATIO);
        let stroke = Stroke::new(self.cell_size * MARK_STROKE_RATIO, color);

        painter.line_segment(
            [center + Vec2::new(-half, -half), center + Vec2::new(half, half)],
            stroke,
        );
        painter.line_segment(
            [center + Vec2::new(-half, half), center + Vec2::new(half, -half)],
            stroke,
        );
    }

    /// Draw an O as a circle outline
    fn draw_o(&self, painter: &Painter, pos: Pos, color: Color32) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * (0.5 - MARK_PAD_RATIO);
        painter.circle_stroke(
            center,
            radius,
            Stroke::new(self.cell_size * MARK_STROKE_RATIO, color),
        );
    }

    /// Draw last move marker in the cell corner
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let offset = self.cell_size * 0.38;
        painter.circle_filled(
            center + Vec2::new(offset, -offset),
            LAST_MOVE_MARKER_RADIUS,
            LAST_MOVE_MARKER,
        );
    }

    /// Draw a strike line through the winning triple
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 3]) {
        let stroke = Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT);
        let start = self.board_to_screen(line[0]);
        let end = self.board_to_screen(line[2]);

        // Extend slightly past the outer cell centers
        let overshoot = (end - start) * 0.18;
        painter.line_segment([start - overshoot, end + overshoot], stroke);
    }

    /// Draw a ghost mark under the pointer, or a rejection dot on an
    /// occupied cell
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Mark, is_valid: bool) {
        if !is_valid {
            let center = self.board_to_screen(pos);
            painter.circle_filled(center, self.cell_size * 0.1, hover_invalid());
            return;
        }

        match turn {
            Mark::X => self.draw_x(painter, pos, ghost_mark(X_MARK)),
            Mark::O => self.draw_o(painter, pos, ghost_mark(O_MARK)),
            Mark::Empty => {}
        }
    }

    /// Convert screen coordinates to a board cell
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

    /// Convert a board cell to its center in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
