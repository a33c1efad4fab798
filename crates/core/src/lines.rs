//! Line-clear module - full-row detection and compaction
//!
//! Scanning and compacting share one predicate and one top-down order (row 21
//! down to row 0), so the rows reported by [`scan_full_rows`] just before a
//! [`compact`] are exactly the rows that call removes.

use arrayvec::ArrayVec;

use crate::grid::Field;
use crate::types::FIELD_HEIGHT;

/// Row indices, highest row first.
pub type Rows = ArrayVec<u8, { FIELD_HEIGHT as usize }>;

/// Full rows, from row 21 down to row 0. Does not mutate the field.
pub fn scan_full_rows(field: &Field) -> Rows {
    field.scan_full_rows()
}

/// Number of full rows.
pub fn count_cleared(field: &Field) -> usize {
    scan_full_rows(field).len()
}

/// Remove all full rows, let the rows above fall into the gaps, and return how
/// many rows were removed.
pub fn compact(field: &mut Field) -> usize {
    clear_lines(field).len()
}

/// Like [`compact`] but returns the removed row indices.
pub fn clear_lines(field: &mut Field) -> Rows {
    let rows = field.compact();
    if !rows.is_empty() {
        tracing::trace!(rows = ?rows.as_slice(), "compacted field");
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Point, Rgba};

    const X: Rgba = Rgba::new(255, 0, 0);

    fn fill_row(field: &mut Field, y: i8) {
        for x in 0..10 {
            field.set(Point::new(x, y), Some(X));
        }
    }

    #[test]
    fn test_scan_is_top_down() {
        let mut field = Field::new();
        fill_row(&mut field, 0);
        fill_row(&mut field, 5);
        fill_row(&mut field, 21);
        assert_eq!(scan_full_rows(&field).as_slice(), &[21, 5, 0]);
        assert_eq!(count_cleared(&field), 3);
    }

    #[test]
    fn test_scan_ignores_row_with_one_gap() {
        let mut field = Field::new();
        fill_row(&mut field, 0);
        field.set(Point::new(9, 0), None);
        assert!(scan_full_rows(&field).is_empty());
        assert_eq!(compact(&mut field), 0);
        assert_eq!(field.get(Point::new(0, 0)), Some(Some(X)));
    }

    #[test]
    fn test_clear_lines_agrees_with_scan() {
        let mut field = Field::new();
        for y in [1, 2, 4, 7] {
            fill_row(&mut field, y);
        }
        field.set(Point::new(3, 3), Some(X));

        let scanned = scan_full_rows(&field);
        let cleared = clear_lines(&mut field);
        assert_eq!(scanned, cleared);
        // rows 0 and 3 survive; row 3's block lands on row 1
        assert_eq!(field.get(Point::new(3, 1)), Some(Some(X)));
        assert_eq!(field.cells().iter().filter(|c| c.is_some()).count(), 1);
    }

    #[test]
    fn test_hidden_rows_slide_into_view() {
        let mut field = Field::new();
        fill_row(&mut field, 0);
        field.set(Point::new(2, 21), Some(X));

        assert_eq!(compact(&mut field), 1);
        assert_eq!(field.get(Point::new(2, 20)), Some(Some(X)));
        assert!(field.row(21).iter().all(Option::is_none));
    }
}
