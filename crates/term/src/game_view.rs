//! GridView: maps a `core::RoundSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. It also owns the
//! inverse mapping (terminal coordinates to grid cell) so mouse clicks land on
//! exactly the cells that were drawn.

use crate::core::{RoundSnapshot, TileSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Position, RoundStatus, GRID_SIZE};

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

/// Where the grid frame sits for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Top-left corner of the border.
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

const BG: Rgb = Rgb::new(30, 30, 40);
const TILE_HIDDEN: Rgb = Rgb::new(235, 235, 235);
const TILE_REVEALED: Rgb = Rgb::new(80, 140, 220);
const TILE_CLEARED: Rgb = Rgb::new(70, 90, 80);
const TILE_WRONG: Rgb = Rgb::new(220, 80, 80);

/// A lightweight terminal renderer for the grid.
pub struct GridView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GridView {
    fn default() -> Self {
        // Roughly square cells on typical terminal glyphs.
        Self {
            cell_w: 6,
            cell_h: 3,
        }
    }
}

impl GridView {
    /// Frame placement: centered, with one header row above and one status
    /// row below.
    pub fn layout(&self, viewport: Viewport) -> GridLayout {
        let frame_w = (GRID_SIZE as u16) * self.cell_w + 2;
        let frame_h = (GRID_SIZE as u16) * self.cell_h + 2;
        let total_h = frame_h + 2;
        GridLayout {
            frame_x: viewport.width.saturating_sub(frame_w) / 2,
            frame_y: viewport.height.saturating_sub(total_h) / 2 + 1,
            frame_w,
            frame_h,
        }
    }

    /// Grid cell under terminal coordinates, if any.
    pub fn cell_at(&self, viewport: Viewport, column: u16, row: u16) -> Option<Position> {
        let layout = self.layout(viewport);
        let x = column.checked_sub(layout.frame_x + 1)?;
        let y = row.checked_sub(layout.frame_y + 1)?;
        Position::checked((y / self.cell_h) as u8, (x / self.cell_w) as u8)
            .filter(|_| x < (GRID_SIZE as u16) * self.cell_w && y < (GRID_SIZE as u16) * self.cell_h)
    }

    /// Render into an existing framebuffer (reused across frames).
    pub fn render_into(&self, snap: &RoundSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let layout = self.layout(viewport);
        let bg = CellStyle::new(Rgb::new(80, 80, 90), BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            bg,
        );
        self.draw_border(fb, layout, border);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let pos = Position::new(row, col);
                match snap.tile_at(pos) {
                    Some(tile) => self.draw_tile(fb, layout, snap, tile),
                    None => self.draw_empty_cell(fb, layout, pos),
                }
            }
        }

        self.draw_header(fb, layout, snap);
        self.draw_status(fb, layout, snap);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &RoundSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: GridLayout, style: CellStyle) {
        let GridLayout {
            frame_x: x,
            frame_y: y,
            frame_w: w,
            frame_h: h,
        } = layout;

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

    /// Top-left of the drawable tile area for a cell, and its size.
    ///
    /// The last column/row of each cell is left as a gutter when there is
    /// room for one.
    fn tile_rect(&self, layout: GridLayout, pos: Position) -> (u16, u16, u16, u16) {
        let px = layout.frame_x + 1 + (pos.col as u16) * self.cell_w;
        let py = layout.frame_y + 1 + (pos.row as u16) * self.cell_h;
        let w = if self.cell_w > 2 { self.cell_w - 1 } else { self.cell_w };
        let h = if self.cell_h > 2 { self.cell_h - 1 } else { self.cell_h };
        (px, py, w, h)
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, layout: GridLayout, pos: Position) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), BG).dim();
        let (px, py, w, h) = self.tile_rect(layout, pos);
        fb.put_char(px + w / 2, py + h / 2, '·', style);
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        layout: GridLayout,
        snap: &RoundSnapshot,
        tile: &TileSnapshot,
    ) {
        let fill = if snap.wrong == Some(tile.id) {
            TILE_WRONG
        } else if tile.cleared {
            TILE_CLEARED
        } else if snap.revealed || snap.status == RoundStatus::Lost {
            TILE_REVEALED
        } else {
            TILE_HIDDEN
        };
        let style = CellStyle::new(Rgb::new(255, 255, 255), fill).bold();

        let (px, py, w, h) = self.tile_rect(layout, tile.position);
        fb.fill_rect(px, py, w, h, ' ', style);

        if snap.shows_number(tile) {
            let digits = if tile.id >= 10 { 2 } else { 1 };
            let nx = px + w.saturating_sub(digits) / 2;
            fb.put_u32(nx, py + h / 2, tile.id as u32, style);
        }
    }

    fn draw_header(&self, fb: &mut FrameBuffer, layout: GridLayout, snap: &RoundSnapshot) {
        let Some(y) = layout.frame_y.checked_sub(1) else {
            return;
        };
        let label = CellStyle::default().bold();
        fb.put_str(layout.frame_x, y, "LEVEL", label);
        fb.put_u32(layout.frame_x + 6, y, snap.displayed_level, CellStyle::default());

        let tiles = CellStyle::default().dim();
        let n = snap.tiles.len() as u32;
        let digits = if n >= 10 { 2 } else { 1 };
        let x = (layout.frame_x + layout.frame_w).saturating_sub(6 + digits);
        let used = fb.put_u32(x, y, n, tiles);
        fb.put_str(x + used, y, " TILES", tiles);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, layout: GridLayout, snap: &RoundSnapshot) {
        let y = layout.frame_y + layout.frame_h;
        let (text, style) = match snap.status {
            RoundStatus::Won => (
                "SUCCESS",
                CellStyle::new(Rgb::new(100, 220, 120), Rgb::new(0, 0, 0)).bold(),
            ),
            RoundStatus::Lost => (
                "WRONG",
                CellStyle::new(TILE_WRONG, Rgb::new(0, 0, 0)).bold(),
            ),
            RoundStatus::Playing if snap.revealed => ("MEMORIZE", CellStyle::default()),
            RoundStatus::Playing => ("GO", CellStyle::default()),
        };
        fb.put_str_centered(layout.frame_x, y, layout.frame_w, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_centers_frame() {
        let view = GridView::default();
        // Frame is 26x14, plus header and status rows.
        let layout = view.layout(Viewport::new(40, 20));
        assert_eq!(layout.frame_w, 26);
        assert_eq!(layout.frame_h, 14);
        assert_eq!(layout.frame_x, 7);
        assert_eq!(layout.frame_y, 3);
    }

    #[test]
    fn cell_at_maps_inside_grid_only() {
        let view = GridView::default();
        let vp = Viewport::new(40, 20);
        // Inner origin is (8, 4).
        assert_eq!(view.cell_at(vp, 8, 4), Some(Position::new(0, 0)));
        assert_eq!(view.cell_at(vp, 13, 6), Some(Position::new(0, 0)));
        assert_eq!(view.cell_at(vp, 14, 4), Some(Position::new(0, 1)));
        assert_eq!(view.cell_at(vp, 8 + 23, 4 + 11), Some(Position::new(3, 3)));
        assert_eq!(view.cell_at(vp, 7, 4), None);
        assert_eq!(view.cell_at(vp, 8 + 24, 4), None);
        assert_eq!(view.cell_at(vp, 8, 4 + 12), None);
    }
}
