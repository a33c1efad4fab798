//! GameView: maps a core [`Snapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Snapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{FIELD_WIDTH, VISIBLE_HEIGHT};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const BLOCK: char = '█';

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Top-left corner of the board frame inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardOrigin {
    pub x: u16,
    pub y: u16,
}

/// Draws the two render layers, a frame and a small stats panel.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    show_grid: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps the 10x20 board at a 1:2 aspect ratio in
        // a typical terminal font.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
            show_grid: true,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    /// Outer size of the framed board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            FIELD_WIDTH as u16 * self.cell_w + 2,
            VISIBLE_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Where the framed board lands in `viewport`.
    pub fn origin(&self, viewport: Viewport) -> BoardOrigin {
        let (frame_w, frame_h) = self.frame_size();
        BoardOrigin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &Snapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let origin = self.origin(viewport);
        let (frame_w, frame_h) = self.frame_size();
        self.draw_border(fb, origin, frame_w, frame_h);

        for (row, cells) in snap.field.iter().enumerate() {
            for x in 0..cells.len() {
                let (ch, style) = match snap.composite(x, row) {
                    Some(color) => (BLOCK, CellStyle::new(color.into(), BOARD_BG).bold()),
                    None if self.show_grid => {
                        ('·', CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim())
                    }
                    None => (' ', CellStyle::new(BOARD_BG, BOARD_BG)),
                };
                self.fill_cell_rect(fb, origin, x as u16, row as u16, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin, frame_w);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &Snapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, origin: BoardOrigin, w: u16, h: u16) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let (x, y) = (origin.x, origin.y);

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

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        origin: BoardOrigin,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin.x + 1 + cell_x * self.cell_w;
        let py = origin.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &Snapshot,
        viewport: Viewport,
        origin: BoardOrigin,
        frame_w: u16,
    ) {
        let panel_x = origin.x.saturating_add(frame_w).saturating_add(2);
        if panel_x.saturating_add(8) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let rows: [(&str, u32, &str); 3] = [
            ("LINES", snap.lines, ""),
            ("SPEED", snap.interval_ms, "ms"),
            ("GAME", snap.games, ""),
        ];
        let mut y = origin.y;
        for (name, n, unit) in rows {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            if !unit.is_empty() {
                fb.put_str(panel_x + digits(n) + 1, y + 1, unit, hint);
            }
            y = y.saturating_add(3);
        }

        for line in ["←→ move", "↑ rotate", "↓ drop", "q quit"] {
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }
}

fn digits(n: u32) -> u16 {
    n.checked_ilog10().map_or(1, |d| d as u16 + 1)
}
