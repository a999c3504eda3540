//! Fixed-size pagination over the filtered set.
//!
//! The paginator owns the clamp: filter and search changes can shrink the
//! filtered set without resetting the page, so the stored page number is
//! only a request and is pulled back into range whenever a slice is taken.

/// Records shown per page, fixed by the view contract.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    current_page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    #[must_use]
    pub const fn new() -> Self {
        Self { current_page: 1 }
    }

    /// `ceil(count / PAGE_SIZE)`; zero when the filtered set is empty.
    #[must_use]
    pub const fn total_pages(count: usize) -> usize {
        count.div_ceil(PAGE_SIZE)
    }

    /// Explicit navigation. Requests outside `[1, total_pages]` are rejected
    /// with no state change; the caller disables the control or ignores the
    /// `false`.
    pub fn request_page(&mut self, page: usize, filtered_count: usize) -> bool {
        if page < 1 || page > Self::total_pages(filtered_count) {
            return false;
        }
        self.current_page = page;
        true
    }

    /// The page that will actually be shown for a set of `filtered_count`
    /// records: the stored request clamped into range, page 1 when the set
    /// is empty.
    #[must_use]
    pub fn effective_page(&self, filtered_count: usize) -> usize {
        self.current_page.min(Self::total_pages(filtered_count)).max(1)
    }

    /// Clamps the stored page itself, so a later growth of the filtered set
    /// does not resurrect a stale out-of-range request.
    pub fn clamp(&mut self, filtered_count: usize) {
        self.current_page = self.effective_page(filtered_count);
    }

    /// The visible slice for the effective page.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let page = self.effective_page(items.len());
        let start = (page - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(items.len());
        if start >= items.len() {
            return &[];
        }
        &items[start..end]
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up_and_is_zero_for_empty_sets() {
        assert_eq!(Paginator::total_pages(0), 0);
        assert_eq!(Paginator::total_pages(1), 1);
        assert_eq!(Paginator::total_pages(10), 1);
        assert_eq!(Paginator::total_pages(11), 2);
        assert_eq!(Paginator::total_pages(25), 3);
    }

    #[test]
    fn out_of_range_requests_are_rejected_without_mutation() {
        let mut pager = Paginator::new();
        assert!(pager.request_page(3, 25));
        assert_eq!(pager.current_page(), 3);

        assert!(!pager.request_page(4, 25));
        assert!(!pager.request_page(0, 25));
        assert_eq!(pager.current_page(), 3);
    }

    #[test]
    fn no_page_is_valid_for_an_empty_set() {
        let mut pager = Paginator::new();
        assert!(!pager.request_page(1, 0));
        assert_eq!(Paginator::total_pages(0), 0);
    }

    #[test]
    fn concatenated_pages_reproduce_the_filtered_set_exactly() {
        for count in [0usize, 1, 9, 10, 11, 25, 30] {
            let items: Vec<usize> = (0..count).collect();
            let mut pager = Paginator::new();
            let mut seen = Vec::new();
            for page in 1..=Paginator::total_pages(count) {
                assert!(pager.request_page(page, count));
                let slice = pager.slice(&items);
                assert!(slice.len() <= PAGE_SIZE, "page {page} of {count}");
                seen.extend_from_slice(slice);
            }
            assert_eq!(seen, items, "count {count}");
        }
    }

    #[test]
    fn shrinking_filtered_set_clamps_to_the_highest_valid_page() {
        let mut pager = Paginator::new();
        assert!(pager.request_page(3, 25));

        // The query narrows the set to 5 records: one page left.
        assert_eq!(pager.effective_page(5), 1);
        let items: Vec<usize> = (0..5).collect();
        assert_eq!(pager.slice(&items), &[0, 1, 2, 3, 4]);

        pager.clamp(5);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn effective_page_reports_one_for_an_empty_set() {
        let mut pager = Paginator::new();
        assert!(pager.request_page(2, 15));
        assert_eq!(pager.effective_page(0), 1);
        let empty: [u8; 0] = [];
        assert!(pager.slice(&empty).is_empty());
    }
}
