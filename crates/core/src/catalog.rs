//! Catalog module - the seven tetromino shapes and their rotation tables
//!
//! Each shape is defined by four base offsets around a pivot plus the number of
//! distinct rotation states it has (1, 2 or 4). The remaining states are
//! generated once, at build time, by applying the quarter turn
//! `(x, y) -> (y, -x)` to the previous state. The finished table is never
//! mutated; look-ups are keyed by (kind, rotation index).

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Point, Rgba, SPAWN_PIVOT};

/// Offsets of the four blocks relative to the pivot
pub type Offsets = [Point; 4];

struct BaseShape {
    kind: PieceKind,
    offsets: [(i8, i8); 4],
    rotations: u8,
    color: Rgba,
}

/// Base definitions in catalog order. Offsets are drawn with the pivot on the
/// lower hidden row, so every piece spawns entirely inside rows 20..=21.
const BASE_SHAPES: [BaseShape; 7] = [
    BaseShape {
        kind: PieceKind::I,
        offsets: [(-1, 0), (0, 0), (1, 0), (2, 0)],
        rotations: 2,
        color: Rgba::new(128, 255, 255),
    },
    BaseShape {
        kind: PieceKind::O,
        offsets: [(0, 0), (0, 1), (1, 1), (1, 0)],
        rotations: 1,
        color: Rgba::new(255, 255, 0),
    },
    BaseShape {
        kind: PieceKind::T,
        offsets: [(-1, 0), (0, 0), (0, 1), (1, 0)],
        rotations: 4,
        color: Rgba::new(255, 0, 255),
    },
    BaseShape {
        kind: PieceKind::S,
        offsets: [(-1, 0), (0, 0), (0, 1), (1, 1)],
        rotations: 2,
        color: Rgba::new(0, 255, 0),
    },
    BaseShape {
        kind: PieceKind::Z,
        offsets: [(-1, 1), (0, 1), (0, 0), (1, 0)],
        rotations: 2,
        color: Rgba::new(255, 0, 0),
    },
    BaseShape {
        kind: PieceKind::J,
        offsets: [(-1, 1), (-1, 0), (0, 0), (1, 0)],
        rotations: 4,
        color: Rgba::new(0, 0, 255),
    },
    BaseShape {
        kind: PieceKind::L,
        offsets: [(-1, 0), (0, 0), (1, 0), (1, 1)],
        rotations: 4,
        color: Rgba::new(255, 255, 128),
    },
];

/// A shape with its precomputed rotation states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    pub kind: PieceKind,
    pub color: Rgba,
    rotations: ArrayVec<Offsets, 4>,
}

impl Shape {
    fn build(base: &BaseShape) -> Self {
        let mut state: Offsets = base.offsets.map(Point::from);
        let mut rotations = ArrayVec::new();
        rotations.push(state);
        for _ in 1..base.rotations {
            state = state.map(Point::rotate_cw);
            rotations.push(state);
        }
        Self {
            kind: base.kind,
            color: base.color,
            rotations,
        }
    }

    /// Number of distinct rotation states (1, 2 or 4).
    pub fn rotation_count(&self) -> u8 {
        self.rotations.len() as u8
    }

    /// Offsets of rotation state `rotation` (taken modulo the state count).
    pub fn offsets(&self, rotation: u8) -> &Offsets {
        &self.rotations[rotation as usize % self.rotations.len()]
    }

    pub fn rotations(&self) -> &[Offsets] {
        &self.rotations
    }
}

/// The falling piece: a shape, a rotation index and a pivot position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: u8,
    pub pivot: Point,
}

impl ActivePiece {
    /// The same piece moved by `delta`.
    pub fn moved(self, delta: Point) -> Self {
        Self {
            pivot: self.pivot.translate(delta),
            ..self
        }
    }

    /// The same piece advanced to its next rotation state, wrapping modulo
    /// `rotation_count`.
    pub fn rotated(self, rotation_count: u8) -> Self {
        Self {
            rotation: (self.rotation + 1) % rotation_count,
            ..self
        }
    }
}

/// Immutable table of all seven shapes, in [`PieceKind::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    shapes: [Shape; 7],
}

impl Catalog {
    /// Build the catalog. Always yields the same shapes in the same order.
    pub fn build() -> Self {
        Self {
            shapes: BASE_SHAPES.each_ref().map(Shape::build),
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, kind: PieceKind) -> &Shape {
        &self.shapes[kind.index()]
    }

    /// Kind of the shape at catalog position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 7`.
    pub fn kind_at(&self, index: usize) -> PieceKind {
        self.shapes[index].kind
    }

    pub fn offsets(&self, kind: PieceKind, rotation: u8) -> &Offsets {
        self.shape(kind).offsets(rotation)
    }

    pub fn color(&self, kind: PieceKind) -> Rgba {
        self.shape(kind).color
    }

    /// A new piece of `kind` at rotation 0 on the spawn pivot.
    pub fn spawn(&self, kind: PieceKind) -> ActivePiece {
        ActivePiece {
            kind,
            rotation: 0,
            pivot: SPAWN_PIVOT,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_counts() {
        let catalog = Catalog::build();
        let counts: Vec<u8> = catalog.shapes().iter().map(Shape::rotation_count).collect();
        assert_eq!(counts, vec![2, 1, 4, 2, 2, 4, 4]);
    }

    #[test]
    fn test_t_rotation_states() {
        let catalog = Catalog::build();
        let t = catalog.shape(PieceKind::T);
        let p = |x, y| Point::new(x, y);

        assert_eq!(t.offsets(0), &[p(-1, 0), p(0, 0), p(0, 1), p(1, 0)]);
        assert_eq!(t.offsets(1), &[p(0, 1), p(0, 0), p(1, 0), p(0, -1)]);
        assert_eq!(t.offsets(2), &[p(1, 0), p(0, 0), p(0, -1), p(-1, 0)]);
        assert_eq!(t.offsets(3), &[p(0, -1), p(0, 0), p(-1, 0), p(0, 1)]);
    }

    #[test]
    fn test_offsets_wrap_modulo_rotation_count() {
        let catalog = Catalog::build();
        let i = catalog.shape(PieceKind::I);
        assert_eq!(i.offsets(2), i.offsets(0));
        assert_eq!(i.offsets(3), i.offsets(1));
    }

    #[test]
    fn test_rotated_wraps() {
        let catalog = Catalog::build();
        let piece = catalog.spawn(PieceKind::J);
        let mut r = piece;
        for _ in 0..4 {
            r = r.rotated(4);
        }
        assert_eq!(r, piece);
        assert_eq!(catalog.spawn(PieceKind::O).rotated(1).rotation, 0);
    }
}
