//! Dirty propagation: which positions a structural edit shifts.
//!
//! Each function returns the index range, in the *edited* sequence, whose
//! stored position no longer matches storage. Kept apart from the
//! index-shifting itself so both rules can be checked on their own.

use std::ops::Range;

/// After inserting at `at`, every item behind the new one moved down by one.
pub fn after_insert(at: usize, len_after: usize) -> Range<usize> {
    at + 1..len_after
}

/// After removing position `at`, every item behind it moved up by one.
pub fn after_remove(at: usize, len_after: usize) -> Range<usize> {
    at..len_after
}

/// After moving `from` to `to`, the moved item and every item between the
/// two positions shifted; the closed span covers both directions.
pub fn after_move(from: usize, to: usize) -> Range<usize> {
    from.min(to)..from.max(to) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_marks_items_behind_the_new_one() {
        // [A, X, B, C]
        assert_eq!(after_insert(1, 4), 2..4);
        // appended: nothing shifts
        assert!(after_insert(3, 4).is_empty());
        // prepended: every old item shifts
        assert_eq!(after_insert(0, 4), 1..4);
    }

    #[test]
    fn remove_marks_items_behind_the_hole() {
        // [A, B, C] remove 1 -> [A, C]
        assert_eq!(after_remove(1, 2), 1..2);
        // removing the last item shifts nothing
        assert!(after_remove(2, 2).is_empty());
    }

    #[test]
    fn move_marks_closed_span_in_both_directions() {
        assert_eq!(after_move(0, 2), 0..3);
        assert_eq!(after_move(2, 0), 0..3);
        assert_eq!(after_move(3, 0), 0..4);
        assert_eq!(after_move(1, 2), 1..3);
    }
}
