//! Speed module - gravity interval as a function of cleared lines
//!
//! The interval falls hyperbolically, `80000 / (9 * lines + 100)` ms, and is
//! pinned to an 80 ms floor once more than 100 lines have been cleared. Speed
//! ramps with every line instead of jumping at level boundaries.

use crate::types::{FALL_BASE, FALL_FLOOR_LINES, FALL_FLOOR_MS, FALL_LINE_WEIGHT, FALL_NUMERATOR};

/// Milliseconds between gravity ticks after `cleared_lines` lines.
pub fn fall_interval_ms(cleared_lines: u32) -> u32 {
    if cleared_lines > FALL_FLOOR_LINES {
        return FALL_FLOOR_MS;
    }
    FALL_NUMERATOR / (FALL_LINE_WEIGHT * cleared_lines + FALL_BASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(fall_interval_ms(0), 800);
        assert_eq!(fall_interval_ms(1), 733);
        assert_eq!(fall_interval_ms(10), 421);
        assert_eq!(fall_interval_ms(100), 80);
        assert_eq!(fall_interval_ms(101), 80);
        assert_eq!(fall_interval_ms(u32::MAX), 80);
    }

    #[test]
    fn test_non_increasing_and_never_below_floor() {
        let mut prev = fall_interval_ms(0);
        for lines in 1..=1_000 {
            let cur = fall_interval_ms(lines);
            assert!(cur <= prev, "interval rose at {} lines", lines);
            assert!(cur >= FALL_FLOOR_MS);
            prev = cur;
        }
        assert_eq!(prev, FALL_FLOOR_MS);
    }
}
