//! Collision and placement tests.

use tui_blockfall::core::placement::{cells_at, try_rotate_in, EVEN_STATE_KICKS, ODD_STATE_KICKS};
use tui_blockfall::core::{can_place, merge, try_rotate, try_translate, ActivePiece, Catalog, Field};
use tui_blockfall::types::{PieceKind, Point, Rgba, SPAWN_PIVOT};

const X: Rgba = Rgba::new(128, 128, 128);

fn piece(kind: PieceKind, rotation: u8, x: i8, y: i8) -> ActivePiece {
    ActivePiece {
        kind,
        rotation,
        pivot: Point::new(x, y),
    }
}

#[test]
fn test_can_place_is_pure() {
    let catalog = Catalog::build();
    let mut field = Field::new();
    field.set(Point::new(3, 3), Some(X));
    let before = field.clone();

    for kind in PieceKind::ALL {
        let p = catalog.spawn(kind);
        let first = can_place(&field, &catalog, &p, Point::new(3, 4));
        let second = can_place(&field, &catalog, &p, Point::new(3, 4));
        assert_eq!(first, second);
    }
    assert_eq!(field, before);
}

#[test]
fn test_merged_placement_is_no_longer_legal() {
    let catalog = Catalog::build();
    for kind in PieceKind::ALL {
        let mut field = Field::new();
        let p = piece(kind, 0, 4, 5);
        assert!(can_place(&field, &catalog, &p, p.pivot));

        merge(&mut field, &catalog, &p);

        assert!(!can_place(&field, &catalog, &p, p.pivot), "{kind:?}");
        let color = catalog.color(kind);
        for cell in cells_at(&catalog, &p, p.pivot) {
            assert_eq!(field.get(cell), Some(Some(color)));
        }
    }
}

#[test]
#[should_panic(expected = "merge onto illegal placement")]
fn test_merge_onto_occupied_cells_panics() {
    let catalog = Catalog::build();
    let mut field = Field::new();
    let p = piece(PieceKind::O, 0, 4, 5);
    merge(&mut field, &catalog, &p);
    merge(&mut field, &catalog, &p);
}

#[test]
fn test_spawn_blocked_by_filled_spawn_cells() {
    let catalog = Catalog::build();
    let mut field = Field::new();
    field.set(Point::new(4, 20), Some(X));
    field.set(Point::new(4, 21), Some(X));

    for kind in PieceKind::ALL {
        let p = catalog.spawn(kind);
        assert!(!can_place(&field, &catalog, &p, SPAWN_PIVOT), "{kind:?}");
    }
}

#[test]
fn test_every_piece_fits_at_spawn_on_empty_field() {
    let catalog = Catalog::build();
    let field = Field::new();
    for kind in PieceKind::ALL {
        let p = catalog.spawn(kind);
        assert!(can_place(&field, &catalog, &p, p.pivot), "{kind:?}");
    }
}

#[test]
fn test_translate_stops_at_walls() {
    let catalog = Catalog::build();
    let field = Field::new();
    let mut p = catalog.spawn(PieceKind::T);

    let left = Point::new(-1, 0);
    let mut steps = 0;
    while let Some(next) = try_translate(&field, &catalog, &p, left) {
        p = next;
        steps += 1;
    }
    // T spans pivot - 1 ..= pivot + 1
    assert_eq!(steps, 3);
    assert_eq!(p.pivot.x, 1);
}

#[test]
fn test_rejected_translate_leaves_piece() {
    let catalog = Catalog::build();
    let mut field = Field::new();
    let p = piece(PieceKind::O, 0, 4, 5);
    field.set(Point::new(6, 5), Some(X));

    assert!(try_translate(&field, &catalog, &p, Point::new(1, 0)).is_none());
    assert_eq!(p, piece(PieceKind::O, 0, 4, 5));
}

#[test]
fn test_odd_state_uses_next_upward_kick() {
    let catalog = Catalog::build();
    let mut field = Field::new();
    // T state 1 covers the cell under the pivot.
    field.set(Point::new(4, 4), Some(X));
    let p = piece(PieceKind::T, 0, 4, 5);

    let (rotated, kick) = try_rotate(&catalog, &p, |c| field.is_free(c)).unwrap();
    assert_eq!(kick, ODD_STATE_KICKS[1]);
    assert_eq!(rotated.pivot, Point::new(4, 6));
    assert_eq!(rotated.rotation, 1);
}

#[test]
fn test_even_state_tries_left_before_right() {
    let catalog = Catalog::build();
    let mut field = Field::new();
    let p = piece(PieceKind::I, 1, 5, 10);

    // Free on both sides: left wins.
    field.set(Point::new(7, 10), Some(X));
    let (_, kick) = try_rotate(&catalog, &p, |c| field.is_free(c)).unwrap();
    assert_eq!(kick, EVEN_STATE_KICKS[1]);

    // Left blocked too: right.
    field.set(Point::new(4, 10), Some(X));
    field.set(Point::new(7, 10), None);
    let (rotated, kick) = try_rotate(&catalog, &p, |c| field.is_free(c)).unwrap();
    assert_eq!(kick, EVEN_STATE_KICKS[2]);
    assert_eq!(rotated.pivot, Point::new(6, 10));
}

#[test]
fn test_rotation_fails_in_a_narrow_shaft() {
    let catalog = Catalog::build();
    let mut field = Field::new();
    for y in 0..22 {
        for x in [3, 5] {
            field.set(Point::new(x, y), Some(X));
        }
    }
    let p = piece(PieceKind::I, 1, 4, 10);
    assert!(try_rotate_in(&field, &catalog, &p).is_none());
}
