use certreq_model::RequestStatus;

/// Discriminant used to narrow a list before pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every row.
    #[default]
    All,
    /// Rows in one lifecycle state.
    Status(RequestStatus),
    /// Rows whose normalized display name occurs more than once.
    Duplicates,
}

/// Active filter discriminant, search term, and 1-based page number.
///
/// Invariant: changing the discriminant or the search term always resets the
/// page to 1; changing only the page leaves both untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    filter: StatusFilter,
    search: String,
    page: usize,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            filter: StatusFilter::All,
            search: String::new(),
            page: 1,
        }
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Pages are 1-based; a request for page 0 lands on page 1.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}
