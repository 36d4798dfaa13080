//! Search page state and the transitions a search request drives through it.
//!
//! The component keeps one [`SearchUiState`] and publishes each snapshot the
//! [`SearchController`] hands back: once when the request starts, once when it
//! settles.

use crate::error::ApiError;
use crate::http::Transport;
use crate::models::Activity;
use crate::search::api::{execute_search, SearchPage};
use crate::search::components::{INITIAL_PROMPT, NO_RESULTS_PROMPT};
use crate::search::pagination::PaginationState;
use crate::search::query::{RawFilters, SearchQuery};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchUiState {
    pub pagination: PaginationState,
    pub activities: Vec<Activity>,
    pub prompt: Option<&'static str>,
    /// `(current_display_count, total)` of the last successful search.
    pub counts: Option<(u64, u64)>,
    pub loading: bool,
    /// Disables the search button while a request is in flight.
    pub searching: bool,
    pub error: Option<(String, Option<String>)>,
}

impl Default for SearchUiState {
    fn default() -> Self {
        Self {
            pagination: PaginationState::default(),
            activities: Vec::new(),
            prompt: Some(INITIAL_PROMPT),
            counts: None,
            loading: false,
            searching: false,
            error: None,
        }
    }
}

impl SearchUiState {
    /// Enters the loading state and builds the request for `page`.
    pub fn begin(&mut self, filters: &RawFilters, page: u32) -> SearchQuery {
        self.searching = true;
        self.loading = true;
        self.error = None;
        self.activities.clear();
        self.prompt = None;
        SearchQuery::build(filters, page)
    }

    /// Applies the outcome of the request built by [`begin`](Self::begin).
    /// Both busy flags are cleared whatever the outcome.
    pub fn finish(&mut self, query: &SearchQuery, outcome: Result<SearchPage, ApiError>) {
        match outcome {
            Ok(page) => {
                self.pagination.set_total(page.total, query.limit);
                log::debug!(
                    "Search returned {} of {} results, page {}/{}",
                    page.activities.len(),
                    page.total,
                    self.pagination.current_page(),
                    self.pagination.total_pages()
                );
                self.prompt = page.activities.is_empty().then_some(NO_RESULTS_PROMPT);
                self.counts = Some((page.current_display_count, page.total));
                self.activities = page.activities;
            }
            Err(e) => {
                log::error!("Search failed: {}", e);
                self.error = Some(e.search_message());
                self.prompt = Some(INITIAL_PROMPT);
            }
        }

        self.loading = false;
        self.searching = false;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

pub struct SearchController<T> {
    transport: Rc<T>,
}

impl<T: Transport> SearchController<T> {
    pub fn new(transport: Rc<T>) -> Self {
        Self { transport }
    }

    /// A new search always starts from page 1.
    pub async fn search(
        &self,
        state: SearchUiState,
        filters: &RawFilters,
        publish: impl Fn(SearchUiState),
    ) {
        let mut state = state;
        state.pagination.reset();
        self.fetch(state, filters, 1, publish).await;
    }

    /// Fetches `page` of the current filters. Pages outside `1..=total_pages`
    /// are ignored without a request; returns whether a search ran.
    pub async fn go_to_page(
        &self,
        state: SearchUiState,
        filters: &RawFilters,
        page: u32,
        publish: impl Fn(SearchUiState),
    ) -> bool {
        let mut state = state;
        if !state.pagination.go_to(page) {
            return false;
        }
        self.fetch(state, filters, page, publish).await;
        true
    }

    async fn fetch(
        &self,
        mut state: SearchUiState,
        filters: &RawFilters,
        page: u32,
        publish: impl Fn(SearchUiState),
    ) {
        let query = state.begin(filters, page);
        publish(state.clone());

        let outcome = execute_search(&*self.transport, &query).await;
        state.finish(&query, outcome);
        publish(state);
    }
}
