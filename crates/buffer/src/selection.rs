use std::cmp::{max, min};
use std::ops::Range;

/// Text selection as a pair of character offsets, `start <= end`.
///
/// A collapsed selection (`start == end`) is the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection between two offsets in any order
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: min(a, b),
            end: max(a, b),
        }
    }

    /// Collapsed selection at `offset`
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Selection is a caret (start == end)
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected chars
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.is_caret()
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Map the selection through a replacement of `removed` by `inserted_len` chars.
    ///
    /// Offsets before (or at) the edit point stay put, offsets after the removed
    /// range shift, offsets inside it collapse to the edit start.
    pub(crate) fn shifted(self, removed: Range<usize>, inserted_len: usize) -> Self {
        let map = |offset: usize| {
            if offset <= removed.start {
                offset
            } else if offset >= removed.end {
                offset - (removed.end - removed.start) + inserted_len
            } else {
                removed.start
            }
        };
        Self {
            start: map(self.start),
            end: map(self.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_offsets() {
        let sel = Selection::new(7, 2);
        assert_eq!(sel.start, 2);
        assert_eq!(sel.end, 7);
        assert_eq!(sel.len(), 5);
        assert!(!sel.is_caret());
    }

    #[test]
    fn test_shift_after_insert() {
        let sel = Selection::new(5, 8).shifted(2..2, 3);
        assert_eq!(sel, Selection::new(8, 11));
    }

    #[test]
    fn test_caret_at_insert_point_stays() {
        let sel = Selection::caret(4).shifted(4..4, 10);
        assert_eq!(sel, Selection::caret(4));
    }

    #[test]
    fn test_offsets_inside_removed_range_collapse() {
        let sel = Selection::new(3, 12).shifted(2..6, 0);
        assert_eq!(sel, Selection::new(2, 8));
    }
}
