use crate::types::{Cell, FIELD_WIDTH, VISIBLE_HEIGHT};

/// Visible rows of one render layer, top row first.
pub type Layer = [[Cell; FIELD_WIDTH as usize]; VISIBLE_HEIGHT as usize];

/// Everything a renderer needs for one frame.
///
/// `field` holds the settled blocks and `piece` the falling piece, as two
/// separate layers. The hidden spawn rows are never included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Snapshot {
    pub field: Layer,
    pub piece: Layer,
    pub lines: u32,
    pub interval_ms: u32,
    pub games: u32,
    pub pieces: u32,
    pub revision: u64,
}

impl Snapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Color at column `x` of visible `row` (0 = top), piece layer on top.
    pub fn composite(&self, x: usize, row: usize) -> Cell {
        self.piece[row][x].or(self.field[row][x])
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            field: [[None; FIELD_WIDTH as usize]; VISIBLE_HEIGHT as usize],
            piece: [[None; FIELD_WIDTH as usize]; VISIBLE_HEIGHT as usize],
            lines: 0,
            interval_ms: 0,
            games: 0,
            pieces: 0,
            revision: 0,
        }
    }
}

/// Consumer of frames. Implemented by the terminal front end.
pub trait RenderSink {
    type Error;

    fn present(&mut self, snapshot: &Snapshot) -> Result<(), Self::Error>;
}
