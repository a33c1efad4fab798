//! Grid module - the playing field and its coordinate transforms
//!
//! The field is 10 columns x 22 rows stored as a flat array. Coordinates are
//! (x, y) with the origin at the bottom-left cell and `y` growing upward, but the
//! storage is row-major with the TOP row first, so a pixel buffer can be filled
//! by a straight copy of the visible tail of the array.
//!
//! ```text
//! index 0          -> (0, 21)   hidden
//! index 10         -> (0, 20)   hidden (spawn row)
//! index 20         -> (0, 19)   first visible row
//! index 219        -> (9, 0)
//! ```

use crate::types::{Cell, Point, Rgba, FIELD_CELLS, FIELD_HEIGHT, FIELD_WIDTH};

const WIDTH: usize = FIELD_WIDTH as usize;

/// True iff `0 <= x <= 9` and `0 <= y <= 21`.
#[inline(always)]
pub fn in_bounds(p: Point) -> bool {
    p.x >= 0 && p.x < FIELD_WIDTH as i8 && p.y >= 0 && p.y < FIELD_HEIGHT as i8
}

/// Linear index of `p` in the top-row-first layout.
///
/// # Panics
///
/// Panics if `p` is outside the field. Callers check [`in_bounds`] first.
#[inline(always)]
pub fn to_index(p: Point) -> usize {
    assert!(in_bounds(p), "cell {:?} is outside the field", p);
    (FIELD_HEIGHT as usize - 1 - p.y as usize) * WIDTH + p.x as usize
}

/// Component-wise vector addition.
#[inline(always)]
pub fn translate(point: Point, delta: Point) -> Point {
    point.translate(delta)
}

/// The playing field - 10 x 22 cells, each EMPTY or an opaque color.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    cells: [Cell; FIELD_CELLS],
}

impl Field {
    /// Create an all-EMPTY field
    pub fn new() -> Self {
        Self {
            cells: [None; FIELD_CELLS],
        }
    }

    pub fn width(&self) -> u8 {
        FIELD_WIDTH
    }

    pub fn height(&self) -> u8 {
        FIELD_HEIGHT
    }

    /// Cell at `p`, or `None` when `p` is out of bounds.
    pub fn get(&self, p: Point) -> Option<Cell> {
        in_bounds(p).then(|| self.cells[to_index(p)])
    }

    /// Overwrite the cell at `p`. Returns false if `p` is out of bounds.
    ///
    /// Gameplay never calls this; it exists for fixtures and tools.
    pub fn set(&mut self, p: Point, cell: Cell) -> bool {
        if !in_bounds(p) {
            return false;
        }
        self.cells[to_index(p)] = cell;
        true
    }

    /// In bounds and EMPTY.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        matches!(self.get(p), Some(None))
    }

    /// The 10 cells of row `y`, left to right.
    pub fn row(&self, y: u8) -> &[Cell] {
        let start = to_index(Point::new(0, y as i8));
        &self.cells[start..start + WIDTH]
    }

    /// Whether every cell of row `y` is occupied.
    pub fn is_row_full(&self, y: u8) -> bool {
        self.row(y).iter().all(Option::is_some)
    }

    /// Whether no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Reset every cell to EMPTY.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Raw storage in the top-row-first layout.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write `color` into every cell in `cells`.
    ///
    /// All cells are checked before any is written, so a bad call leaves the
    /// field untouched.
    ///
    /// # Panics
    ///
    /// Panics if any cell is out of bounds or already occupied. Merging onto an
    /// illegal placement is a caller bug.
    pub fn merge(&mut self, cells: &[Point], color: Rgba) {
        for &p in cells {
            assert!(
                self.is_free(p),
                "merge onto illegal placement at {:?}",
                p
            );
        }
        for &p in cells {
            self.cells[to_index(p)] = Some(color);
        }
    }

    /// Rows that are completely filled, scanned from row 21 down to row 0.
    pub fn scan_full_rows(&self) -> arrayvec::ArrayVec<u8, { FIELD_HEIGHT as usize }> {
        (0..FIELD_HEIGHT).rev().filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove every full row in one top-down pass and return the removed rows
    /// (in the same order [`Field::scan_full_rows`] reports them).
    ///
    /// For each full row the rows above it slide down by one and the top row is
    /// refilled with EMPTY. Rows below a cleared row never move, so the row
    /// indices still waiting to be scanned stay valid.
    pub fn compact(&mut self) -> arrayvec::ArrayVec<u8, { FIELD_HEIGHT as usize }> {
        let mut cleared = arrayvec::ArrayVec::new();
        for y in (0..FIELD_HEIGHT).rev() {
            if !self.is_row_full(y) {
                continue;
            }
            let offset = to_index(Point::new(0, y as i8));
            // copy_within handles the overlapping ranges
            self.cells.copy_within(0..offset, WIDTH);
            self.cells[..WIDTH].fill(None);
            cleared.push(y);
        }
        cleared
    }

    /// Create from rows given top row first (row 21 .. row 0), for testing.
    #[cfg(test)]
    pub fn from_rows(rows: &[[Cell; WIDTH]; FIELD_HEIGHT as usize]) -> Self {
        let mut field = Self::new();
        for (i, row) in rows.iter().enumerate() {
            field.cells[i * WIDTH..(i + 1) * WIDTH].copy_from_slice(row);
        }
        field
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}
