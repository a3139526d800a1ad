//! GameView: maps a [`Session`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! World-to-terminal mapping: one terminal column covers `UNITS_PER_COL`
//! world units horizontally, one terminal row covers one block height
//! vertically. Block rows draw bottom-up inside the frame; rows with a
//! negative offset (shifted below the pedestal by the camera follow)
//! are clipped.

use serenity_tower_core::{Block, Session};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    Phase, BLOCK_HEIGHT, CAMERA_SHIFT_Y, HUE_LIGHTNESS, HUE_SATURATION,
};

/// World units per terminal column.
const UNITS_PER_COL: f32 = 8.0;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the tower game.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Playfield width in terminal columns.
    fn cols(&self, session: &Session) -> u16 {
        (session.container_width() / UNITS_PER_COL).round() as u16
    }

    /// Visible block rows: from the pedestal up to one row past the
    /// camera line, where compaction keeps the spawn height pinned.
    fn rows(&self) -> u16 {
        (CAMERA_SHIFT_Y / BLOCK_HEIGHT) as u16 + 1
    }

    /// Render the current session into a framebuffer.
    pub fn render(&self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let cols = self.cols(session);
        let rows = self.rows();
        // Interior: block rows plus one pedestal row at the bottom.
        let frame_w = cols + 2;
        let frame_h = rows + 1 + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(24, 26, 34),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, cols, rows + 1, ' ', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Pedestal, until the camera follow scrolls it out of view.
        let base_visible = session
            .stack()
            .first()
            .map(|lowest| lowest.y >= 0.0)
            .unwrap_or(true);
        if base_visible {
            let base = Block::virtual_base(session.container_width());
            let pedestal = CellStyle {
                fg: Rgb::new(120, 120, 130),
                bg: bg.bg,
                bold: false,
                dim: true,
            };
            let (px, pw) = self.col_span(&base, cols);
            let py = start_y + 1 + rows;
            fb.fill_rect(start_x + 1 + px, py, pw, 1, '▀', pedestal);
        }

        // Settled tower.
        for block in session.stack() {
            self.draw_block(&mut fb, session, block, start_x, start_y, false);
        }

        // Moving (or frozen, after a miss) block.
        if let Some(block) = session.current() {
            self.draw_block(&mut fb, session, block, start_x, start_y, true);
        }

        self.draw_side_panel(&mut fb, session, viewport, start_x, start_y, frame_w);

        match session.phase() {
            Phase::NotStarted => {
                self.draw_overlay_text(
                    &mut fb,
                    start_x,
                    start_y,
                    frame_w,
                    frame_h,
                    "PRESS SPACE TO START",
                );
            }
            Phase::GameOver => {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
            }
            Phase::Running => {}
        }

        fb
    }

    /// Terminal column offset and width for a block, clipped to the
    /// playfield. A sliver always keeps at least one column so the
    /// player can still see what they are aiming at.
    fn col_span(&self, block: &Block, cols: u16) -> (u16, u16) {
        let left = (block.x / UNITS_PER_COL).round().max(0.0) as u16;
        let right = (block.right() / UNITS_PER_COL).round() as u16;
        let left = left.min(cols.saturating_sub(1));
        let width = right.saturating_sub(left).max(1).min(cols - left);
        (left, width)
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        block: &Block,
        start_x: u16,
        start_y: u16,
        bold: bool,
    ) {
        let rows = self.rows();
        let row = (block.y / BLOCK_HEIGHT).floor() as i32;
        if row < 0 || row >= rows as i32 {
            return;
        }
        let cols = self.cols(session);
        let (cx, cw) = self.col_span(block, cols);

        let style = CellStyle {
            fg: Rgb::from_hsl(block.hue, HUE_SATURATION, HUE_LIGHTNESS),
            bg: Rgb::new(24, 26, 34),
            bold,
            dim: false,
        };
        let ty = start_y + 1 + (rows - 1 - row as u16);
        fb.fill_rect(start_x + 1 + cx, ty, cw, 1, '█', style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let hint = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", session.score()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{:.1}", session.speed()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPACE place", hint);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "R     restart", hint);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "Q     quit", hint);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameAction;

    const VIEW: Viewport = Viewport {
        width: 90,
        height: 20,
    };

    fn fb_text(fb: &FrameBuffer) -> String {
        let mut out = String::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                out.push(fb.get(x, y).map(|c| c.ch).unwrap_or(' '));
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn idle_session_shows_start_prompt() {
        let session = Session::new(1);
        let fb = GameView::new().render(&session, VIEW);
        assert!(fb_text(&fb).contains("PRESS SPACE TO START"));
    }

    #[test]
    fn running_session_draws_the_moving_block() {
        let mut session = Session::new(1);
        session.apply_action(GameAction::Place);
        let fb = GameView::new().render(&session, VIEW);
        let text = fb_text(&fb);
        assert!(text.contains('█'));
        assert!(!text.contains("PRESS SPACE"));
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn game_over_shows_overlay() {
        let mut session = Session::new(1);
        session.apply_action(GameAction::Place);
        // Drop far outside the base: [124, 324) never reaches x = 0..1.
        session.place_at(432.0);
        assert_eq!(session.phase(), Phase::GameOver);
        let fb = GameView::new().render(&session, VIEW);
        assert!(fb_text(&fb).contains("GAME OVER"));
    }

    #[test]
    fn side_panel_shows_score_and_speed() {
        let mut session = Session::new(1);
        session.apply_action(GameAction::Place);
        session.place_at(124.0);
        let fb = GameView::new().render(&session, VIEW);
        let text = fb_text(&fb);
        assert!(text.contains("SCORE"));
        assert!(text.contains("SPEED"));
        assert!(text.contains("2.2"));
    }

    #[test]
    fn placed_block_color_follows_its_hue() {
        let mut session = Session::new(1);
        session.apply_action(GameAction::Place);
        session.place_at(124.0);
        let placed = *session.stack().last().unwrap();
        let fb = GameView::new().render(&session, VIEW);

        let expected = Rgb::from_hsl(placed.hue, HUE_SATURATION, HUE_LIGHTNESS);
        let found = fb
            .cells()
            .iter()
            .any(|c| c.ch == '█' && c.style.fg == expected);
        assert!(found);
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let mut session = Session::new(1);
        session.apply_action(GameAction::Place);
        let fb = GameView::new().render(&session, Viewport::new(10, 4));
        assert_eq!((fb.width(), fb.height()), (10, 4));
    }
}
