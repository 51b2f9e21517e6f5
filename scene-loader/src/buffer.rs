//! Off-screen grid of terminal cells.
//!
//! Coordinates are signed so callers can address cells of rectangles that
//! an animated offset pushed partly off the grid. Those cells are ignored.

use crate::rect::Rect;
use crate::text::glyph_width;
use crate::types::{Rgb, TextStyle};

const WHITE: Rgb = Rgb::new(255, 255, 255);

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Covered by the wide glyph to its left.
    pub continuation: bool,
}

impl Cell {
    /// An empty cell showing only `bg`.
    pub const fn blank(bg: Rgb) -> Self {
        Self {
            glyph: ' ',
            fg: WHITE,
            bg,
            style: TextStyle {
                bold: false,
                dim: false,
            },
            continuation: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// A `width` x `height` grid of blank cells over `bg`.
    pub fn new(width: u16, height: u16, bg: Rgb) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::blank(bg); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// The whole grid as a rectangle.
    pub fn area(&self) -> Rect {
        Rect::from_size(self.width as i32, self.height as i32)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let inside = x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32;
        inside.then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Composite `color` with coverage `alpha` over the backgrounds in `rect`.
    pub fn tint(&mut self, rect: Rect, color: Rgb, alpha: f32) {
        let rect = rect.intersect(&self.area());
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if let Some(cell) = self.cell_mut(x, y) {
                    cell.bg = cell.bg.blend(color, alpha);
                }
            }
        }
    }

    /// Write `glyph` at (x, y), blending `color` over the cell background.
    ///
    /// A wide glyph also claims the cell to its right. Nothing is written
    /// unless every covered cell is on the grid.
    pub fn put_glyph(
        &mut self,
        x: i32,
        y: i32,
        glyph: char,
        color: Rgb,
        alpha: f32,
        style: TextStyle,
    ) {
        let width = glyph_width(glyph) as i32;
        if self.index(x + width - 1, y).is_none() {
            return;
        }
        let Some(cell) = self.cell_mut(x, y) else {
            return;
        };
        cell.glyph = glyph;
        cell.fg = cell.bg.blend(color, alpha);
        cell.style = style;
        cell.continuation = false;

        for dx in 1..width {
            if let Some(cell) = self.cell_mut(x + dx, y) {
                cell.glyph = ' ';
                cell.continuation = true;
            }
        }
    }

    /// Cells that differ from `previous`. Every cell counts as changed when
    /// the sizes differ.
    pub fn changes_since<'a>(
        &'a self,
        previous: &'a Buffer,
    ) -> impl Iterator<Item = (u16, u16, &'a Cell)> + 'a {
        let resized = self.width != previous.width || self.height != previous.height;
        let width = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(move |(i, cell)| resized || previous.cells.get(*i) != Some(*cell))
            .map(move |(i, cell)| ((i % width) as u16, (i / width) as u16, cell))
    }

    /// Glyphs of row `y`, without continuation cells.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width as i32)
            .filter_map(|x| self.cell(x, y as i32))
            .filter(|cell| !cell.continuation)
            .map(|cell| cell.glyph)
            .collect()
    }
}
