/// Position within a server-paginated listing.
///
/// `page` is 1-based. The server's `total` is authoritative for bounds, so
/// every derived value (page count, visible range, button state) comes from
/// the three numbers held here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    page_size: u32,
    total: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 50, 0)
    }
}

impl Pagination {
    /// Page and page size are clamped to at least 1.
    pub fn new(page: u32, page_size: u32, total: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            total,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// `ceil(total / page_size)`; zero for an empty library.
    pub fn page_count(&self) -> u64 {
        self.total.div_ceil(u64::from(self.page_size))
    }

    /// Number of items before the first row of this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    /// Rows this page holds: `min(page_size, total - offset)`, or 0 when the
    /// page lies past the end.
    pub fn expected_rows(&self) -> u64 {
        self.total
            .saturating_sub(self.offset())
            .min(u64::from(self.page_size))
    }

    /// 1-based inclusive range of items shown, `None` when the page is empty.
    pub fn visible_range(&self) -> Option<(u64, u64)> {
        match self.expected_rows() {
            0 => None,
            rows => Some((self.offset() + 1, self.offset() + rows)),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.page_count()
    }

    pub fn previous_page(&self) -> Option<u32> {
        self.has_previous().then(|| self.page - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_rows_full_and_partial_pages() {
        assert_eq!(Pagination::new(1, 50, 120).expected_rows(), 50);
        assert_eq!(Pagination::new(2, 50, 120).expected_rows(), 50);
        assert_eq!(Pagination::new(3, 50, 120).expected_rows(), 20);
    }

    #[test]
    fn test_expected_rows_past_end_is_zero() {
        assert_eq!(Pagination::new(4, 50, 120).expected_rows(), 0);
        assert_eq!(Pagination::new(1, 50, 0).expected_rows(), 0);
    }

    #[test]
    fn test_expected_rows_matches_formula_for_grid() {
        for total in [0u64, 1, 49, 50, 51, 99, 100, 101, 1000] {
            for page_size in [1u32, 7, 25, 50] {
                for page in 1u32..=12 {
                    let p = Pagination::new(page, page_size, total);
                    let remaining = total as i64 - (i64::from(page) - 1) * i64::from(page_size);
                    let expected = if remaining >= 0 {
                        remaining.min(i64::from(page_size)) as u64
                    } else {
                        0
                    };
                    assert_eq!(p.expected_rows(), expected, "{page}/{page_size}/{total}");
                }
            }
        }
    }

    #[test]
    fn test_previous_disabled_only_on_first_page() {
        assert!(!Pagination::new(1, 50, 500).has_previous());
        assert!(Pagination::new(2, 50, 500).has_previous());
        assert_eq!(Pagination::new(2, 50, 500).previous_page(), Some(1));
        assert_eq!(Pagination::new(1, 50, 500).previous_page(), None);
    }

    #[test]
    fn test_next_disabled_on_last_page() {
        assert!(Pagination::new(1, 50, 101).has_next());
        assert!(Pagination::new(2, 50, 101).has_next());
        assert!(!Pagination::new(3, 50, 101).has_next());
        assert!(!Pagination::new(1, 50, 50).has_next());
        assert_eq!(Pagination::new(2, 50, 101).next_page(), Some(3));
    }

    #[test]
    fn test_empty_library_has_no_pages() {
        let p = Pagination::new(1, 50, 0);
        assert_eq!(p.page_count(), 0);
        assert!(!p.has_next());
        assert!(!p.has_previous());
        assert_eq!(p.visible_range(), None);
    }

    #[test]
    fn test_visible_range() {
        assert_eq!(Pagination::new(1, 50, 120).visible_range(), Some((1, 50)));
        assert_eq!(Pagination::new(3, 50, 120).visible_range(), Some((101, 120)));
    }

    #[test]
    fn test_new_clamps_zero_values() {
        let p = Pagination::new(0, 0, 10);
        assert_eq!(p.page(), 1);
        assert_eq!(p.page_size(), 1);
        assert_eq!(p.page_count(), 10);
    }
}
