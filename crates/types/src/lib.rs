//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no dependencies, so the rules engine, the
//! terminal front end and the tests can all agree on one vocabulary.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (x = 0..=9, left to right)
//! - **Height**: 22 rows (y = 0..=21, bottom to top)
//! - **Visible**: the bottom 20 rows; rows 20 and 21 are hidden spawn rows
//! - **Spawn pivot**: (4, 20)
//!
//! # Fall Interval
//!
//! The gravity interval (milliseconds per row) shrinks hyperbolically with the
//! number of cleared lines and never drops below a floor:
//!
//! | Lines | Interval |
//! |-------|----------|
//! | 0 | 800ms |
//! | 10 | 421ms |
//! | 50 | 145ms |
//! | 100+ | 80ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, Point, Rgba, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 22);
//!
//! let p = Point::new(4, 20).translate(Point::new(-1, 0));
//! assert_eq!(p, Point::new(3, 20));
//!
//! assert_eq!(PieceKind::ALL[0], PieceKind::I);
//! assert_eq!(Rgba::new(255, 0, 0).to_u32(), 0xFF00_00FF);
//! assert_eq!(GameAction::RotateCw.as_str(), "rotateCw");
//! ```

use std::ops::Add;

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: u8 = 10;

/// Field height in cells, hidden spawn rows included (22 rows)
pub const FIELD_HEIGHT: u8 = 22;

/// Rows shown to the player (the bottom 20)
pub const VISIBLE_HEIGHT: u8 = 20;

/// Total number of cells in the field
pub const FIELD_CELLS: usize = FIELD_WIDTH as usize * FIELD_HEIGHT as usize;

/// Pivot position of a freshly spawned piece, inside the hidden rows
pub const SPAWN_PIVOT: Point = Point::new(4, 20);

/// Lower bound of the fall interval in milliseconds.
pub const FALL_FLOOR_MS: u32 = 80;

/// Numerator of the hyperbolic fall-interval curve.
pub const FALL_NUMERATOR: u32 = 80_000;

/// Weight of one cleared line in the fall-interval denominator.
pub const FALL_LINE_WEIGHT: u32 = 9;

/// Constant term of the fall-interval denominator.
pub const FALL_BASE: u32 = 100;

/// Past this many cleared lines the interval is pinned to [`FALL_FLOOR_MS`].
pub const FALL_FLOOR_LINES: u32 = 100;

/// Poll timeout for the runner when no gravity tick is pending.
pub const IDLE_POLL_MS: u32 = 250;

/// A grid coordinate or an offset between coordinates.
///
/// Origin is the bottom-left cell of the full field; `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Component-wise vector addition.
    #[inline]
    pub const fn translate(self, delta: Point) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }

    /// Quarter turn clockwise about the origin: `(x, y) -> (y, -x)`.
    #[inline]
    pub const fn rotate_cw(self) -> Self {
        Self {
            x: self.y,
            y: -self.x,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        self.translate(rhs)
    }
}

impl From<(i8, i8)> for Point {
    fn from((x, y): (i8, i8)) -> Self {
        Self { x, y }
    }
}

/// An opaque color.
///
/// There is no alpha channel to set: every color a cell can hold is fully
/// opaque, which keeps the field free of partially transparent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Alpha channel; always 255.
    pub const fn alpha(&self) -> u8 {
        u8::MAX
    }

    /// Pack as little-endian RGBA (`r | g << 8 | b << 16 | a << 24`), the layout
    /// pixel buffers expect.
    pub const fn to_u32(&self) -> u32 {
        (self.r as u32) | (self.g as u32) << 8 | (self.b as u32) << 16 | (self.alpha() as u32) << 24
    }
}

/// A single field position
///
/// - `None`: EMPTY
/// - `Some(Rgba)`: occupied by a settled block of that color
pub type Cell = Option<Rgba>;

/// The seven tetromino kinds, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Catalog order. The position of a kind in this array is its shape index.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Shape index in catalog order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single uppercase letter, used by the side panel.
    pub fn letter(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Discrete player requests delivered by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (never locks)
    SoftDrop,
    /// Rotate piece 90° clockwise, with kicks
    RotateCw,
}

impl GameAction {
    /// Translation applied by a movement action; `None` for rotation.
    pub const fn delta(&self) -> Option<Point> {
        match self {
            GameAction::MoveLeft => Some(Point::new(-1, 0)),
            GameAction::MoveRight => Some(Point::new(1, 0)),
            GameAction::SoftDrop => Some(Point::new(0, -1)),
            GameAction::RotateCw => None,
        }
    }

    /// camelCase name, used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
        }
    }
}
