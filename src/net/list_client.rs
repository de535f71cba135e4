//! Async driver for the paginated-list state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ListController` couples a `ListState<T>` signal to an injected fetch
//! function (one per resource type: events, orders). Pages call `set_query`
//! on every interaction; the controller decides whether to debounce (search
//! edits) or fetch immediately (page/filter changes), and the state machine's
//! sequence tokens guarantee a superseded response is discarded. All network
//! work happens on the browser's single-threaded event loop; no true request
//! cancellation is needed, staleness is purely logical.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::PageResult;
use crate::state::list::{DEFAULT_SEARCH_DEBOUNCE_MS, ListQuery, ListState};

/// Injected page-fetch function: maps a query to one page of results.
pub type FetchPage<T> = Arc<
    dyn Fn(ListQuery) -> Pin<Box<dyn Future<Output = Result<PageResult<T>, ApiError>>>>
        + Send
        + Sync,
>;

/// Drives one remote collection: debounces search edits, issues fetches,
/// and applies results through the stale-response guard.
pub struct ListController<T: 'static> {
    state: RwSignal<ListState<T>>,
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fetch: FetchPage<T>,
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    debounce_ms: u32,
}

impl<T> Clone for ListController<T> {
    fn clone(&self) -> Self {
        Self { state: self.state, fetch: Arc::clone(&self.fetch), debounce_ms: self.debounce_ms }
    }
}

impl<T: Send + Sync + 'static> ListController<T> {
    /// Wrap `state` with the fetch function for its resource type.
    pub fn new<F, Fut>(state: RwSignal<ListState<T>>, fetch: F) -> Self
    where
        F: Fn(ListQuery) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<PageResult<T>, ApiError>> + 'static,
    {
        Self {
            state,
            fetch: Arc::new(move |query| Box::pin(fetch(query))),
            debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
        }
    }

    /// Override the search debounce interval.
    pub fn with_debounce_ms(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// The observable list state this controller drives.
    pub fn state(&self) -> RwSignal<ListState<T>> {
        self.state
    }

    /// Switch the list to `query`.
    ///
    /// Search-only changes wait out the debounce window and collapse to the
    /// final value; page and filter changes fetch immediately. The previous
    /// items stay visible while the fetch is in flight.
    pub fn set_query(&self, query: ListQuery) {
        let search_only = self.state.with_untracked(|s| s.query.is_search_only_change(&query));
        if search_only {
            let mut generation = 0;
            self.state.update(|s| generation = s.begin_search_edit(query));
            self.spawn_debounced(generation);
        } else {
            self.spawn_fetch(query);
        }
    }

    /// Re-issue the current query immediately, e.g. from a retry button.
    pub fn refresh(&self) {
        let query = self.state.with_untracked(|s| s.query.clone());
        self.spawn_fetch(query);
    }

    #[cfg(feature = "hydrate")]
    fn spawn_fetch(&self, query: ListQuery) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            this.run_fetch(query).await;
        });
    }

    #[cfg(not(feature = "hydrate"))]
    fn spawn_fetch(&self, query: ListQuery) {
        // No network on the server; record the query so hydration fetches it.
        self.state.update(|s| {
            s.begin_fetch(query);
        });
    }

    #[cfg(feature = "hydrate")]
    fn spawn_debounced(&self, generation: u64) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            let quiet = std::time::Duration::from_millis(u64::from(this.debounce_ms));
            gloo_timers::future::sleep(quiet).await;
            let mut winner = None;
            this.state.update(|s| winner = s.debounced_query(generation));
            if let Some(query) = winner {
                this.run_fetch(query).await;
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    fn spawn_debounced(&self, generation: u64) {
        let _ = generation;
    }

    #[cfg(feature = "hydrate")]
    async fn run_fetch(&self, query: ListQuery) {
        let mut seq = 0;
        self.state.update(|s| seq = s.begin_fetch(query.clone()));

        match (self.fetch)(query).await {
            Ok(page) => {
                self.state.update(|s| {
                    s.apply_success(seq, page.items, page.total);
                });
            }
            Err(error) => {
                leptos::logging::warn!("list fetch failed: {error}");
                self.state.update(|s| {
                    s.apply_failure(seq, error);
                });
            }
        }
    }
}
