//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, ShapeMatrix};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, GamePhase, BOARD_COLUMNS, BOARD_ROWS, EMPTY};

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

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const PLAYFIELD: Rgb = Rgb::new(0, 0, 0);
const GRID_DOT: CellStyle = CellStyle::new(Rgb::new(60, 60, 70), PLAYFIELD);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BACKGROUND);
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), BACKGROUND).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BACKGROUND);
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), BACKGROUND).bold();

/// Block color per cell value.
fn cell_color(value: Cell) -> Option<Rgb> {
    match value {
        1 => Some(Rgb::hex(0xFF0D72)),
        2 => Some(Rgb::hex(0x0DC2FF)),
        3 => Some(Rgb::hex(0x0DFF72)),
        4 => Some(Rgb::hex(0xF538FF)),
        5 => Some(Rgb::hex(0xFF8E0D)),
        6 => Some(Rgb::hex(0xFFE138)),
        7 => Some(Rgb::hex(0x3877FF)),
        _ => None,
    }
}

/// Terminal renderer for the board, the next-piece preview and the score panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Size of the bordered playfield in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_COLUMNS as u16 * self.cell_w + 2,
            BOARD_ROWS as u16 * self.cell_h + 2,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport first.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(VALUE.fg, BACKGROUND));

        let (frame_w, frame_h) = self.frame_size();
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                self.draw_cell(fb, origin_x, origin_y, x as i32, y as i32, value);
            }
        }

        if let Some(active) = snap.active {
            for (x, y, value) in active.matrix.occupied() {
                self.draw_cell(
                    fb,
                    origin_x,
                    origin_y,
                    active.x + x as i32,
                    active.y + y as i32,
                    value,
                );
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin_x + frame_w + 2, origin_y);

        match snap.phase {
            GamePhase::Paused => {
                self.draw_overlay(fb, origin_x, origin_y, frame_w, frame_h, &["PAUSED"]);
            }
            GamePhase::GameOver => {
                let score = format!("SCORE {}", snap.score);
                self.draw_overlay(
                    fb,
                    origin_x,
                    origin_y,
                    frame_w,
                    frame_h,
                    &["GAME OVER", &score, "ENTER: RESTART"],
                );
            }
            GamePhase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.put(x, y, '┌', BORDER);
        fb.put(right, y, '┐', BORDER);
        fb.put(x, bottom, '└', BORDER);
        fb.put(right, bottom, '┘', BORDER);
        for dx in x + 1..right {
            fb.put(dx, y, '─', BORDER);
            fb.put(dx, bottom, '─', BORDER);
        }
        for dy in y + 1..bottom {
            fb.put(x, dy, '│', BORDER);
            fb.put(right, dy, '│', BORDER);
        }
    }

    /// Draw one board cell. Cells outside the visible grid (e.g. above the top)
    /// are skipped.
    fn draw_cell(&self, fb: &mut FrameBuffer, origin_x: u16, origin_y: u16, x: i32, y: i32, value: Cell) {
        if x < 0 || y < 0 || x >= BOARD_COLUMNS as i32 || y >= BOARD_ROWS as i32 {
            return;
        }
        let px = origin_x + 1 + x as u16 * self.cell_w;
        let py = origin_y + 1 + y as u16 * self.cell_h;

        match cell_color(value) {
            Some(color) => {
                fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', CellStyle::new(color, PLAYFIELD));
            }
            None if value == EMPTY => {
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', GRID_DOT);
                fb.put(px, py, '·', GRID_DOT);
            }
            None => {}
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        top: u16,
    ) {
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let mut y = top;
        fb.put_str(panel_x, y, "SCORE", LABEL);
        fb.put_str(panel_x, y + 1, &snap.score.to_string(), VALUE);
        y += 3;

        fb.put_str(panel_x, y, "LEVEL", LABEL);
        fb.put_str(panel_x, y + 1, &snap.level.to_string(), VALUE);
        y += 3;

        fb.put_str(panel_x, y, "LINES", LABEL);
        fb.put_str(panel_x, y + 1, &snap.lines.to_string(), VALUE);
        y += 3;

        fb.put_str(panel_x, y, "NEXT", LABEL);
        self.draw_preview(fb, &snap.next_matrix, panel_x, y + 1);
        y += 6;

        let pause = if snap.phase == GamePhase::Paused {
            "P  Resume"
        } else {
            "P  Pause"
        };
        fb.put_str(panel_x, y, pause, VALUE);
        fb.put_str(panel_x, y + 1, "R  Restart", VALUE);
        fb.put_str(panel_x, y + 2, "Q  Quit", VALUE);
    }

    /// Draw the next piece's matrix at preview scale, centering 2x2 and 3x3
    /// shapes in the 4x4 preview box.
    fn draw_preview(&self, fb: &mut FrameBuffer, matrix: &ShapeMatrix, x: u16, y: u16) {
        let inset = (4 - matrix.size() as u16) / 2;
        for (mx, my, value) in matrix.occupied() {
            if let Some(color) = cell_color(value) {
                let px = x + (inset + mx as u16) * self.cell_w;
                let py = y + inset + my as u16;
                fb.fill_rect(px, py, self.cell_w, 1, '█', CellStyle::new(color, BACKGROUND));
            }
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let first = origin_y + frame_h.saturating_sub(lines.len() as u16) / 2;
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = origin_x + frame_w.saturating_sub(text_w) / 2;
            fb.put_str(x, first + i as u16, text, OVERLAY);
        }
    }
}
