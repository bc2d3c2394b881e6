//! Pagination and search state.
//!
//! The list is shown either in paged mode, where `current_page` drives the
//! listing request and pager controls are visible, or in search mode, where
//! results are unpaginated and the pager is hidden. Leaving search mode
//! always returns to page 1.

use crate::api::PageInfo;

/// Which request drives the card list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// One page of the listing.
    #[default]
    Paged,
    /// Results for this (trimmed, non-empty) search term.
    Search(String),
}

/// What the pager should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerControls {
    /// Text such as `Página 1 de 3`.
    pub label: String,
    /// Whether "previous" is enabled.
    pub prev_enabled: bool,
    /// Whether "next" is enabled.
    pub next_enabled: bool,
}

/// Current page, display mode and the search input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    current_page: u32,
    mode: DisplayMode,
    page_info: Option<PageInfo>,
    search_input: String,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            current_page: 1,
            mode: DisplayMode::Paged,
            page_info: None,
            search_input: String::new(),
        }
    }
}

impl BrowseState {
    /// Creates paged-mode state at page 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current page (1-based).
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns the display mode.
    #[must_use]
    pub const fn mode(&self) -> &DisplayMode {
        &self.mode
    }

    /// Returns true while search mode is active.
    #[must_use]
    pub const fn is_search_active(&self) -> bool {
        matches!(self.mode, DisplayMode::Search(_))
    }

    /// Returns the active search term, if any.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        match &self.mode {
            DisplayMode::Search(term) => Some(term.as_str()),
            DisplayMode::Paged => None,
        }
    }

    /// Returns the page info of the last applied listing.
    #[must_use]
    pub const fn page_info(&self) -> Option<PageInfo> {
        self.page_info
    }

    /// Returns the pager to display, or `None` when it is hidden.
    ///
    /// The pager is hidden in search mode, before the first page arrives,
    /// and when the listing has no pages.
    #[must_use]
    pub fn pager(&self) -> Option<PagerControls> {
        if self.is_search_active() {
            return None;
        }
        let info = self.page_info.filter(PageInfo::has_pages)?;
        Some(PagerControls {
            label: info.label(),
            prev_enabled: info.has_prev(),
            next_enabled: info.has_next(),
        })
    }

    /// Returns the page "next" would request, or `None` in search mode.
    ///
    /// No upper bound is applied; the server decides whether the page is
    /// empty.
    #[must_use]
    pub const fn next_page_target(&self) -> Option<u32> {
        if self.is_search_active() {
            return None;
        }
        Some(self.current_page.saturating_add(1))
    }

    /// Returns the page "previous" would request, or `None` when on page 1
    /// or in search mode.
    #[must_use]
    pub const fn prev_page_target(&self) -> Option<u32> {
        if self.is_search_active() || self.current_page <= 1 {
            return None;
        }
        Some(self.current_page - 1)
    }

    /// Enters search mode for `term`.
    pub fn enter_search(&mut self, term: String) {
        self.mode = DisplayMode::Search(term);
    }

    /// Leaves search mode (if active).
    ///
    /// The current page and pager stay at the last applied page until the
    /// caller's page request is answered.
    pub fn exit_search(&mut self) {
        self.mode = DisplayMode::Paged;
    }

    /// Records a successfully loaded page.
    pub const fn apply_page(&mut self, info: PageInfo) {
        self.current_page = info.page();
        self.page_info = Some(info);
    }

    /// Returns the search input buffer.
    #[must_use]
    pub const fn search_input(&self) -> &str {
        self.search_input.as_str()
    }

    /// Appends a character to the search input.
    pub fn push_search_char(&mut self, character: char) {
        self.search_input.push(character);
    }

    /// Removes the last character of the search input.
    pub fn search_backspace(&mut self) {
        self.search_input.pop();
    }

    /// Empties the search input.
    pub fn clear_search_input(&mut self) {
        self.search_input.clear();
    }
}
