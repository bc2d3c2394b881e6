//! Pagination state for the paged review listing.
//!
//! `PageInfo` captures the current page position and whether navigation in
//! either direction is possible. Navigation availability is always derived
//! from the page number and page count rather than trusted from the server.

/// Number of reviews requested per page.
pub const PAGE_SIZE: u8 = 9;

/// Current page state for paginated results.
///
/// # Example
///
/// ```
/// use reviewdesk::api::PageInfo;
///
/// let info = PageInfo::new(1, 3);
/// assert!(!info.has_prev());
/// assert!(info.has_next());
/// assert_eq!(info.label(), "Página 1 de 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page number (1-based).
    page: u32,
    /// Total number of pages; zero when there are no reviews.
    total_pages: u32,
}

impl PageInfo {
    /// Creates page info for `page` out of `total_pages`.
    ///
    /// A page number of zero is normalised to one.
    #[must_use]
    pub const fn new(page: u32, total_pages: u32) -> Self {
        Self {
            page: if page == 0 { 1 } else { page },
            total_pages,
        }
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Returns true if pages exist before the current one.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Returns true if more pages exist after the current one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns true when pagination controls should be shown at all.
    #[must_use]
    pub const fn has_pages(&self) -> bool {
        self.total_pages > 0
    }

    /// Returns the pager label, e.g. `Página 2 de 5`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Página {} de {}", self.page, self.total_pages)
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::PageInfo;

    #[rstest]
    #[case(1, 0, false, false)]
    #[case(1, 1, false, false)]
    #[case(1, 3, false, true)]
    #[case(2, 3, true, true)]
    #[case(3, 3, true, false)]
    #[case(4, 3, true, false)]
    fn navigation_flags_follow_page_position(
        #[case] page: u32,
        #[case] total_pages: u32,
        #[case] has_prev: bool,
        #[case] has_next: bool,
    ) {
        let info = PageInfo::new(page, total_pages);

        assert_eq!(info.has_prev(), has_prev, "has_prev for {page}/{total_pages}");
        assert_eq!(info.has_next(), has_next, "has_next for {page}/{total_pages}");
    }

    #[test]
    fn has_prev_and_has_next_match_definition_for_all_small_pages() {
        for total_pages in 0..6_u32 {
            for page in 1..8_u32 {
                let info = PageInfo::new(page, total_pages);
                assert_eq!(info.has_prev(), page > 1);
                assert_eq!(info.has_next(), page < total_pages);
            }
        }
    }

    #[test]
    fn zero_page_is_normalised() {
        assert_eq!(PageInfo::new(0, 2).page(), 1);
    }

    #[test]
    fn label_uses_portuguese_wording() {
        assert_eq!(PageInfo::new(2, 5).label(), "Página 2 de 5");
    }

    #[test]
    fn empty_listing_hides_pager() {
        assert!(!PageInfo::default().has_pages());
    }
}
