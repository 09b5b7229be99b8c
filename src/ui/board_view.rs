//! Board rendering for the Gomoku GUI
//!
//! Shows a window onto the unbounded grid. Dragging or the arrow keys
//! move the window; clicking an empty cell places a mark.

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;
use crate::{Board, Mark, Pos};

/// What the board should highlight this frame
pub struct BoardOverlay<'a> {
    pub current_turn: Mark,
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    pub winning_line: Option<&'a [Pos]>,
    pub accepts_input: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Board coordinate shown at the centre of the view
    center: Vec2,
    cell_size: f32,
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            cell_size: CELL_SIZE,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Move the view so `pos` is centred
    pub fn center_on(&mut self, pos: Pos) {
        self.center = Vec2::new(pos.x as f32, pos.y as f32);
    }

    /// Shift the view by whole cells
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.center += Vec2::new(dx, dy);
    }

    /// Render the board and return click position if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &BoardOverlay<'_>) -> Option<Pos> {
        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
        self.board_rect = response.rect;

        if response.dragged() {
            self.center -= response.drag_delta() / self.cell_size;
        }

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);
        self.draw_grid(&painter);

        if let Some(line) = overlay.winning_line {
            self.draw_winning_line(&painter, line);
        }

        self.draw_marks(&painter, board);

        if let Some(pos) = overlay.last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(pos) = overlay.suggested_move {
            self.draw_suggestion(&painter, pos);
        }

        if !overlay.accepts_input {
            return None;
        }

        let pointer = response.hover_pos()?;
        let pos = self.screen_to_board(pointer);
        if !board.is_empty(pos) {
            return None;
        }
        self.draw_hover_preview(&painter, pos, overlay.current_turn);

        if response.clicked() {
            Some(pos)
        } else {
            None
        }
    }

    /// Inclusive range of board cells intersecting the view
    fn visible_range(&self) -> (Pos, Pos) {
        let half = self.board_rect.size() / (2.0 * self.cell_size);
        let min = Pos::new(
            (self.center.x - half.x).floor() as i32 - 1,
            (self.center.y - half.y).floor() as i32 - 1,
        );
        let max = Pos::new(
            (self.center.x + half.x).ceil() as i32 + 1,
            (self.center.y + half.y).ceil() as i32 + 1,
        );
        (min, max)
    }

    /// Draw cell borders, with the origin's row and column emphasised
    fn draw_grid(&self, painter: &Painter) {
        let (min, max) = self.visible_range();
        let rect = self.board_rect;
        let half = self.cell_size * 0.5;

        for x in min.x..=max.x {
            let sx = self.board_to_screen(Pos::new(x, 0)).x - half;
            if sx < rect.min.x || sx > rect.max.x {
                continue;
            }
            let color = if x == 0 || x == 1 { AXIS_LINE } else { GRID_LINE };
            painter.line_segment(
                [Pos2::new(sx, rect.min.y), Pos2::new(sx, rect.max.y)],
                Stroke::new(GRID_LINE_WIDTH, color),
            );
        }
        for y in min.y..=max.y {
            let sy = self.board_to_screen(Pos::new(0, y)).y - half;
            if sy < rect.min.y || sy > rect.max.y {
                continue;
            }
            let color = if y == 0 || y == 1 { AXIS_LINE } else { GRID_LINE };
            painter.line_segment(
                [Pos2::new(rect.min.x, sy), Pos2::new(rect.max.x, sy)],
                Stroke::new(GRID_LINE_WIDTH, color),
            );
        }
    }

    /// Draw every placed mark inside the view
    fn draw_marks(&self, painter: &Painter, board: &Board) {
        let (min, max) = self.visible_range();
        for (pos, mark) in board.iter() {
            if (min.x..=max.x).contains(&pos.x) && (min.y..=max.y).contains(&pos.y) {
                self.draw_mark(painter, pos, mark, mark_color(mark));
            }
        }
    }

    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark, color: Color32) {
        let center = self.board_to_screen(pos);
        let r = self.cell_size * MARK_RATIO;
        let stroke = Stroke::new(MARK_WIDTH, color);

        match mark {
            Mark::First => {
                painter.line_segment([center + Vec2::new(-r, -r), center + Vec2::new(r, r)], stroke);
                painter.line_segment([center + Vec2::new(-r, r), center + Vec2::new(r, -r)], stroke);
            }
            Mark::Second => {
                painter.circle_stroke(center, r, stroke);
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let corner = self.board_to_screen(pos) + Vec2::splat(self.cell_size * 0.35);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Fill the winning cells and join them
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        for &pos in line {
            let cell = Rect::from_center_size(self.board_to_screen(pos), Vec2::splat(self.cell_size - 2.0));
            painter.rect_filled(cell, CornerRadius::same(4), WIN_HIGHLIGHT);
        }
        if let (Some(&first), Some(&last)) = (line.first(), line.last()) {
            painter.line_segment(
                [self.board_to_screen(first), self.board_to_screen(last)],
                Stroke::new(2.0, LAST_MOVE_MARKER),
            );
        }
    }

    fn draw_suggestion(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_stroke(center, self.cell_size * 0.4, Stroke::new(2.0, SUGGESTION));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(16.0),
            SUGGESTION,
        );
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Mark) {
        let cell = Rect::from_center_size(self.board_to_screen(pos), Vec2::splat(self.cell_size - 2.0));
        painter.rect_filled(cell, CornerRadius::same(4), hover_valid());
        self.draw_mark(painter, pos, turn, mark_color(turn).gamma_multiply(0.35));
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Pos {
        let rel = (screen_pos - self.board_rect.center()) / self.cell_size + self.center;
        Pos::new(rel.x.round() as i32, rel.y.round() as i32)
    }

    /// Convert board position to screen coordinates (cell centre)
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let offset = Vec2::new(pos.x as f32 - self.center.x, pos.y as f32 - self.center.y);
        self.board_rect.center() + offset * self.cell_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            center: Vec2::ZERO,
            cell_size: 40.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 400.0)),
        }
    }

    #[test]
    fn test_screen_board_roundtrip() {
        let mut view = view();
        for pos in [Pos::new(0, 0), Pos::new(-3, 2), Pos::new(4, -4)] {
            assert_eq!(view.screen_to_board(view.board_to_screen(pos)), pos);
        }
        view.center_on(Pos::new(100, -50));
        assert_eq!(view.screen_to_board(Pos2::new(200.0, 200.0)), Pos::new(100, -50));
    }

    #[test]
    fn test_pan_moves_center() {
        let mut view = view();
        view.pan(2.0, -1.0);
        assert_eq!(view.screen_to_board(Pos2::new(200.0, 200.0)), Pos::new(2, -1));
    }

    #[test]
    fn test_visible_range_covers_view() {
        let view = view();
        let (min, max) = view.visible_range();
        assert!(min.x <= -5 && max.x >= 5);
        assert!(min.y <= -5 && max.y >= 5);
    }
}
