//! Menu browsing state.
//!
//! Changing any filter input sends the browser back to page 1, so a page
//! number from a larger result set never leaks into a smaller one.

use crate::filter::{filter_catalog, FilterParams, SortKey, VegMode};
use crate::item::{Category, MenuItem};
use crate::paginate::{page_count, paginate, Page};

/// Filter selections plus the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuQuery {
    params: FilterParams,
    page: usize,
    page_size: usize,
}

impl MenuQuery {
    /// Creates a query on page 1 with default filters.
    pub fn new(page_size: usize) -> Self {
        Self {
            params: FilterParams::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Current filter selections.
    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    /// Requested page (may exceed the page count until the next `run`).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Cards per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Selects a category (`None` = All).
    pub fn set_category(&mut self, category: Option<Category>) {
        if self.params.category != category {
            self.params.category = category;
            self.page = 1;
        }
    }

    /// Updates the search text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.params.query != query {
            self.params.query = query;
            self.page = 1;
        }
    }

    /// Selects a food sub-category (`None` = All).
    pub fn set_sub_category(&mut self, sub: Option<String>) {
        if self.params.sub_category != sub {
            self.params.sub_category = sub;
            self.page = 1;
        }
    }

    /// Selects the veg mode.
    pub fn set_veg(&mut self, veg: VegMode) {
        if self.params.veg != veg {
            self.params.veg = veg;
            self.page = 1;
        }
    }

    /// Selects the sort order.
    pub fn set_sort(&mut self, sort: SortKey) {
        if self.params.sort != sort {
            self.params.sort = sort;
            self.page = 1;
        }
    }

    /// Jumps to `page`, clamped against the result set of `items`.
    pub fn go_to(&mut self, items: &[MenuItem], page: usize) {
        let count = page_count(filter_catalog(items, &self.params).len(), self.page_size);
        self.page = page.clamp(1, count);
    }

    /// Moves one page forward, stopping at the last page.
    pub fn next(&mut self, items: &[MenuItem]) {
        self.go_to(items, self.page.saturating_add(1));
    }

    /// Moves one page back, stopping at page 1.
    pub fn prev(&mut self, items: &[MenuItem]) {
        self.go_to(items, self.page.saturating_sub(1));
    }

    /// Filters, sorts and slices `items` for the current state.
    pub fn run<'a>(&self, items: &'a [MenuItem]) -> Page<&'a MenuItem> {
        let filtered = filter_catalog(items, &self.params);
        paginate(&filtered, self.page_size, self.page)
    }
}

impl Default for MenuQuery {
    fn default() -> Self {
        Self::new(crate::DEFAULT_PAGE_SIZE)
    }
}
