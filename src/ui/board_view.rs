//! Board rendering for the Othello GUI

use crate::{Board, Cell, Player, Pos, BOARD_SIZE};
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
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Option<Player>,
        legal_moves: &[Pos],
        last_move: Option<Pos>,
        accept_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Fit a square board into the available space
        let board_size = available_size.x.min(available_size.y) - 16.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        // Frame and felt background
        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_FRAME);
        let felt = Rect::from_min_size(
            self.board_rect.min + Vec2::splat(BOARD_MARGIN - 6.0),
            Vec2::splat(self.cell_size * BOARD_SIZE as f32 + 12.0),
        );
        painter.rect_filled(felt, CornerRadius::same(4), BOARD_BG);

        self.draw_grid(&painter);
        self.draw_discs(&painter, board);

        // Legal-move hints for the side to move
        for &pos in legal_moves {
            self.draw_hint(&painter, pos);
        }

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        // Hover preview and click handling
        let mut clicked_pos = None;

        if accept_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let (Some(board_pos), Some(turn)) =
                    (self.screen_to_board(pointer_pos), current_turn)
                {
                    let is_valid = legal_moves.contains(&board_pos);

                    self.draw_hover_preview(&painter, board_pos, turn, is_valid);

                    if response.clicked() && is_valid {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the 8x8 cell grid
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = self.cell_size * BOARD_SIZE as f32;

        for i in 0..=BOARD_SIZE {
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

    /// Draw all placed discs
    fn draw_discs(&self, painter: &Painter, board: &Board) {
        for pos in Board::positions() {
            if let Cell::Taken(player) = board.get(pos) {
                self.draw_disc(painter, pos, player);
            }
        }
    }

    /// Draw a single disc with a little depth
    fn draw_disc(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        match player {
            Player::Black => {
                painter.circle_filled(
                    center + Vec2::new(1.5, 1.5),
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_DISC);

                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(
                    center + highlight_offset,
                    radius * 0.2,
                    BLACK_DISC_HIGHLIGHT,
                );
            }
            Player::White => {
                painter.circle_filled(
                    center + Vec2::new(1.5, 1.5),
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_DISC);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_DISC_SHADOW),
                );
            }
        }
    }

    /// Draw a legal-move hint dot
    fn draw_hint(&self, painter: &Painter, pos: Pos) {
        let center = self.cell_center(pos);
        painter.circle_filled(center, self.cell_size * HINT_RADIUS_RATIO, HINT_DOT);
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.cell_center(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Player, is_valid: bool) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        let color = if is_valid {
            match turn {
                Player::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 110),
                Player::White => Color32::from_rgba_unmultiplied(240, 240, 240, 110),
            }
        } else {
            super::theme::hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to a board cell
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        Pos::try_new(row, col).ok()
    }

    /// Center of a cell in screen coordinates
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
