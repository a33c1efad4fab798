//! Placement module - collision checks, merging, movement and kicked rotation
//!
//! A placement is legal when all four cells of the piece's current rotation,
//! shifted to the candidate pivot, are inside the field and EMPTY.
//!
//! Rotation uses a small fixed kick table instead of a full rotation system:
//! after turning, the new state is tried at a short, ordered list of offsets and
//! the first legal one wins. States with an odd index try upward nudges, states
//! with an even index try sideways nudges. The order is part of the behavior:
//! when several offsets are legal, the earliest one is chosen.

use crate::catalog::{ActivePiece, Catalog};
use crate::grid::Field;
use crate::types::Point;

/// Kicks tried when rotating into an odd-indexed state.
pub const ODD_STATE_KICKS: [Point; 3] = [Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)];

/// Kicks tried when rotating into an even-indexed state.
pub const EVEN_STATE_KICKS: [Point; 5] = [
    Point::new(0, 0),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(-2, 0),
    Point::new(2, 0),
];

/// Kick list for rotation state `rotation`.
pub fn kicks_for(rotation: u8) -> &'static [Point] {
    if rotation % 2 == 1 {
        &ODD_STATE_KICKS
    } else {
        &EVEN_STATE_KICKS
    }
}

/// Absolute cells covered by `piece` (current rotation) with its pivot at `pos`.
pub fn cells_at(catalog: &Catalog, piece: &ActivePiece, pos: Point) -> [Point; 4] {
    catalog
        .offsets(piece.kind, piece.rotation)
        .map(|offset| pos.translate(offset))
}

/// Whether `piece` fits with its pivot at `pos`. Pure; never touches the field.
pub fn can_place(field: &Field, catalog: &Catalog, piece: &ActivePiece, pos: Point) -> bool {
    cells_at(catalog, piece, pos)
        .iter()
        .all(|&cell| field.is_free(cell))
}

/// Write the piece's color into the field at its current pivot.
///
/// # Panics
///
/// Panics if the placement is not legal (see [`Field::merge`]).
pub fn merge(field: &mut Field, catalog: &Catalog, piece: &ActivePiece) {
    let cells = cells_at(catalog, piece, piece.pivot);
    field.merge(&cells, catalog.color(piece.kind));
}

/// The piece moved by `delta`, if that placement is legal. No kicks.
pub fn try_translate(
    field: &Field,
    catalog: &Catalog,
    piece: &ActivePiece,
    delta: Point,
) -> Option<ActivePiece> {
    let moved = piece.moved(delta);
    can_place(field, catalog, &moved, moved.pivot).then_some(moved)
}

/// Rotate `piece` one state clockwise and resolve kicks.
///
/// `is_free` reports whether an absolute cell may be occupied. Returns the new
/// piece and the kick that was applied, or `None` if every kick collides.
pub fn try_rotate(
    catalog: &Catalog,
    piece: &ActivePiece,
    is_free: impl Fn(Point) -> bool,
) -> Option<(ActivePiece, Point)> {
    let shape = catalog.shape(piece.kind);
    let turned = piece.rotated(shape.rotation_count());
    let offsets = shape.offsets(turned.rotation);

    kicks_for(turned.rotation).iter().find_map(|&kick| {
        let pivot = turned.pivot.translate(kick);
        offsets
            .iter()
            .all(|&offset| is_free(pivot.translate(offset)))
            .then_some((ActivePiece { pivot, ..turned }, kick))
    })
}

/// [`try_rotate`] against a field.
pub fn try_rotate_in(field: &Field, catalog: &Catalog, piece: &ActivePiece) -> Option<ActivePiece> {
    try_rotate(catalog, piece, |p| field.is_free(p)).map(|(rotated, _)| rotated)
}
