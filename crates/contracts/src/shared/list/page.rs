//! Page arithmetic for server-side pagination.
//!
//! Pages are 1-based. `index` always stays inside `[1, total_pages]`, and an
//! empty result set still has one (empty) page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub index: usize,
    pub size: usize,
    pub total_count: usize,
}

impl Page {
    pub fn new(size: usize) -> Self {
        Self {
            index: 1,
            size: size.max(1),
            total_count: 0,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(self.size.max(1)).max(1)
    }

    /// Moves to `requested`, or returns the page unchanged when it is out of range.
    pub fn go_to(self, requested: usize) -> Self {
        if requested < 1 || requested > self.total_pages() {
            return self;
        }
        Self {
            index: requested,
            ..self
        }
    }

    /// Records a new total and pulls `index` back if the result set shrank below it.
    pub fn set_total_count(self, total_count: usize) -> Self {
        let updated = Self {
            total_count,
            ..self
        };
        Self {
            index: updated.index.clamp(1, updated.total_pages()),
            ..updated
        }
    }

    /// Page-size change; restarts from the first page.
    pub fn with_size(self, size: usize) -> Self {
        Self {
            index: 1,
            size: size.max(1),
            ..self
        }
    }

    pub fn first(self) -> Self {
        self.go_to(1)
    }

    pub fn last(self) -> Self {
        self.go_to(self.total_pages())
    }

    pub fn next(self) -> Self {
        self.go_to(self.index + 1)
    }

    pub fn prev(self) -> Self {
        match self.index.checked_sub(1) {
            Some(index) => self.go_to(index),
            None => self,
        }
    }

    pub fn has_next(&self) -> bool {
        self.index < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.index > 1
    }

    /// Zero-based position of the first record on this page.
    pub fn offset(&self) -> usize {
        (self.index.max(1) - 1) * self.size
    }

    /// 1-based `(from, to)` bounds of the visible records; `(0, 0)` when nothing matched.
    pub fn range_label(&self) -> (usize, usize) {
        if self.total_count == 0 {
            return (0, 0);
        }
        let from = self.offset() + 1;
        let to = (self.index * self.size).min(self.total_count);
        (from, to)
    }

    pub fn showing_label(&self) -> String {
        let (from, to) = self.range_label();
        format!("Showing {} to {} of {}", from, to, self.total_count)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(index: usize, size: usize, total_count: usize) -> Page {
        Page {
            index,
            size,
            total_count,
        }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(page(1, 10, 0).total_pages(), 1);
        assert_eq!(page(1, 10, 10).total_pages(), 1);
        assert_eq!(page(1, 10, 11).total_pages(), 2);
        assert_eq!(page(1, 10, 23).total_pages(), 3);
    }

    #[test]
    fn test_go_to_out_of_range_is_noop() {
        let current = page(2, 10, 45);
        for requested in [0, 6, 7, 100, usize::MAX] {
            assert_eq!(current.go_to(requested), current);
        }
        assert_eq!(current.go_to(5).index, 5);
        assert_eq!(current.go_to(1).index, 1);
    }

    #[test]
    fn test_shrinking_total_clamps_index() {
        let clamped = page(5, 10, 45).set_total_count(32);
        assert_eq!(clamped.index, 4);
        assert_eq!(clamped.total_pages(), 4);

        let emptied = page(3, 10, 25).set_total_count(0);
        assert_eq!(emptied.index, 1);
    }

    #[test]
    fn test_growing_total_keeps_index() {
        assert_eq!(page(2, 10, 15).set_total_count(90).index, 2);
    }

    #[test]
    fn test_walk_through_23_records() {
        let mut current = Page::new(10).set_total_count(23);
        assert_eq!(current.total_pages(), 3);
        assert_eq!(current.showing_label(), "Showing 1 to 10 of 23");
        assert!(!current.has_prev());

        current = current.next().next();
        assert_eq!(current.index, 3);
        assert_eq!(current.showing_label(), "Showing 21 to 23 of 23");
        assert!(!current.has_next());
        assert_eq!(current.next(), current);
    }

    #[test]
    fn test_prev_first_last() {
        let current = page(1, 10, 50);
        assert_eq!(current.prev(), current);
        assert_eq!(current.last().index, 5);
        assert_eq!(current.last().prev().index, 4);
        assert_eq!(current.last().first().index, 1);
    }

    #[test]
    fn test_with_size_resets_index() {
        let resized = page(4, 10, 80).with_size(50);
        assert_eq!(resized.index, 1);
        assert_eq!(resized.size, 50);
        assert_eq!(resized.total_pages(), 2);
        assert_eq!(Page::new(0).size, 1);
    }

    #[test]
    fn test_empty_range() {
        assert_eq!(Page::new(10).range_label(), (0, 0));
        assert_eq!(Page::new(10).showing_label(), "Showing 0 to 0 of 0");
    }
}
