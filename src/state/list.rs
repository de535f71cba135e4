//! Generic paginated-list state machine.
//!
//! DESIGN
//! ======
//! Every screen that shows a filterable, searchable, paginated collection
//! (events, orders) drives one `ListState<T>`. The machine is pure: fetches
//! are identified by monotonically increasing sequence numbers, and a
//! resolved fetch applies only if its sequence is still the newest, so an
//! old slow response can never overwrite a newer query's result. Search
//! edits are coalesced through a debounce generation counter; the async
//! driver in `net::list_client` supplies the actual timer and HTTP call.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use std::collections::BTreeMap;

use crate::net::error::ApiError;

/// Quiet period applied to search-box edits before a fetch is issued.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;

/// The pagination, search text, and filter selections that fully determine
/// one list fetch. Immutable: every interaction builds a new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page index.
    pub page: u32,
    /// Rows per page.
    pub page_size: u32,
    /// Free-text search, may be empty.
    pub search: String,
    /// Filter key/value selections, e.g. `category=music`.
    pub filters: BTreeMap<String, String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::first_page(20)
    }
}

impl ListQuery {
    /// An empty query for page 1 with the given page size.
    pub fn first_page(page_size: u32) -> Self {
        Self { page: 1, page_size, search: String::new(), filters: BTreeMap::new() }
    }

    /// The same query on a different page.
    pub fn with_page(&self, page: u32) -> Self {
        Self { page: page.max(1), ..self.clone() }
    }

    /// The same query with new search text; paging resets to page 1.
    pub fn with_search(&self, search: &str) -> Self {
        Self { page: 1, search: search.to_owned(), ..self.clone() }
    }

    /// The same query with a filter set (`Some`) or cleared (`None`);
    /// paging resets to page 1.
    pub fn with_filter(&self, key: &str, value: Option<&str>) -> Self {
        let mut filters = self.filters.clone();
        match value {
            Some(value) => {
                filters.insert(key.to_owned(), value.to_owned());
            }
            None => {
                filters.remove(key);
            }
        }
        Self { page: 1, filters, ..self.clone() }
    }

    /// Whether `newer` differs from this query only in its search text.
    ///
    /// Search edits reset paging, so `page` is excluded from the comparison;
    /// a `page` or filter interaction on its own is never a search-only change.
    pub fn is_search_only_change(&self, newer: &Self) -> bool {
        self.search != newer.search
            && self.page_size == newer.page_size
            && self.filters == newer.filters
    }
}

/// Where the most recent fetch for a list stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListStatus {
    /// No fetch has been requested yet.
    #[default]
    Idle,
    /// A fetch is in flight; `items`/`total` still hold the previous result.
    Loading,
    /// `items`/`total` reflect the newest query.
    Success,
    /// The newest fetch failed; `items`/`total` hold the last good result.
    Error,
}

/// Observable state for one remote collection.
///
/// `items` and `total` only ever reflect the most recently completed
/// successful fetch; in-flight and superseded fetches leave them untouched.
#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub status: ListStatus,
    pub items: Vec<T>,
    /// Server-reported total row count across all pages.
    pub total: u64,
    pub error: Option<ApiError>,
    /// The query the machine currently considers newest.
    pub query: ListQuery,
    fetch_seq: u64,
    debounce_gen: u64,
    pending_search: Option<ListQuery>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            status: ListStatus::Idle,
            items: Vec::new(),
            total: 0,
            error: None,
            query: ListQuery::default(),
            fetch_seq: 0,
            debounce_gen: 0,
            pending_search: None,
        }
    }
}

impl<T> ListState<T> {
    /// Record that a fetch for `query` is starting and return its sequence
    /// token. Previous `items`/`total` are kept for display while loading.
    ///
    /// Starting a fetch also abandons any search edit still waiting out its
    /// debounce window, since that edit's query is now outdated.
    pub fn begin_fetch(&mut self, query: ListQuery) -> u64 {
        self.fetch_seq += 1;
        self.debounce_gen += 1;
        self.pending_search = None;
        self.query = query;
        self.status = ListStatus::Loading;
        self.fetch_seq
    }

    /// Apply a successful fetch result if `seq` is still the newest fetch.
    /// Returns whether the result was applied; superseded results are
    /// discarded with no state change.
    pub fn apply_success(&mut self, seq: u64, items: Vec<T>, total: u64) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        self.status = ListStatus::Success;
        self.items = items;
        self.total = total;
        self.error = None;
        true
    }

    /// Apply a failed fetch if `seq` is still the newest fetch. The last
    /// good `items`/`total` are retained so the UI can show stale data under
    /// an error banner instead of a blank page.
    pub fn apply_failure(&mut self, seq: u64, error: ApiError) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        self.status = ListStatus::Error;
        self.error = Some(error);
        true
    }

    /// Record a search edit and return its debounce generation token.
    ///
    /// The edit becomes the newest query immediately (status goes to
    /// `Loading`), but the fetch itself waits until `debounced_query`
    /// confirms the generation survived the quiet period.
    pub fn begin_search_edit(&mut self, query: ListQuery) -> u64 {
        self.debounce_gen += 1;
        self.query = query.clone();
        self.pending_search = Some(query);
        self.status = ListStatus::Loading;
        self.debounce_gen
    }

    /// Take the pending search query if `generation` is still the newest
    /// edit. Returns `None` when a later edit or fetch superseded it, in
    /// which case no fetch should be issued for this generation.
    pub fn debounced_query(&mut self, generation: u64) -> Option<ListQuery> {
        if generation != self.debounce_gen {
            return None;
        }
        self.pending_search.take()
    }
}
