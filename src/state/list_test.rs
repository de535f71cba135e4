use super::*;
use crate::net::error::ApiErrorKind;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Row {
    id: String,
    name: String,
}

fn row(id: &str, name: &str) -> Row {
    Row { id: id.to_owned(), name: name.to_owned() }
}

// =============================================================
// ListQuery
// =============================================================

#[test]
fn first_page_is_empty_query_on_page_one() {
    let query = ListQuery::first_page(12);
    assert_eq!(query.page, 1);
    assert_eq!(query.page_size, 12);
    assert!(query.search.is_empty());
    assert!(query.filters.is_empty());
}

#[test]
fn with_search_resets_page() {
    let query = ListQuery::first_page(10).with_page(4).with_search("jazz");
    assert_eq!(query.page, 1);
    assert_eq!(query.search, "jazz");
}

#[test]
fn with_filter_sets_clears_and_resets_page() {
    let base = ListQuery::first_page(10).with_page(3);
    let filtered = base.with_filter("category", Some("music"));
    assert_eq!(filtered.page, 1);
    assert_eq!(filtered.filters.get("category").map(String::as_str), Some("music"));

    let cleared = filtered.with_filter("category", None);
    assert!(cleared.filters.is_empty());
}

#[test]
fn with_page_clamps_to_one() {
    assert_eq!(ListQuery::first_page(10).with_page(0).page, 1);
}

#[test]
fn search_only_change_ignores_page_reset() {
    let before = ListQuery::first_page(10).with_page(3);
    let after = before.with_search("ab");
    assert!(before.is_search_only_change(&after));
}

#[test]
fn filter_change_is_not_search_only() {
    let before = ListQuery::first_page(10);
    let after = before.with_search("ab").with_filter("category", Some("arts"));
    assert!(!before.is_search_only_change(&after));
}

#[test]
fn page_change_alone_is_not_search_only() {
    let before = ListQuery::first_page(10);
    let after = before.with_page(2);
    assert!(!before.is_search_only_change(&after));
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn default_state_is_idle_and_empty() {
    let state = ListState::<Row>::default();
    assert_eq!(state.status, ListStatus::Idle);
    assert!(state.items.is_empty());
    assert_eq!(state.total, 0);
    assert!(state.error.is_none());
}

#[test]
fn begin_fetch_keeps_previous_items_while_loading() {
    let mut state = ListState::<Row>::default();
    let seq = state.begin_fetch(ListQuery::first_page(10));
    assert!(state.apply_success(seq, vec![row("1", "X")], 1));

    state.begin_fetch(state.query.with_page(2));
    assert_eq!(state.status, ListStatus::Loading);
    assert_eq!(state.items, vec![row("1", "X")]);
    assert_eq!(state.total, 1);
}

#[test]
fn success_applies_items_total_and_status() {
    let mut state = ListState::<Row>::default();
    let seq = state.begin_fetch(ListQuery::first_page(10));
    assert!(state.apply_success(seq, vec![row("1", "X")], 1));
    assert_eq!(state.status, ListStatus::Success);
    assert_eq!(state.items, vec![row("1", "X")]);
    assert_eq!(state.total, 1);
    assert!(state.error.is_none());
}

#[test]
fn stale_success_is_discarded() {
    let mut state = ListState::<Row>::default();
    let q1 = ListQuery::first_page(10);
    let q2 = q1.with_filter("category", Some("music"));

    let seq1 = state.begin_fetch(q1);
    let seq2 = state.begin_fetch(q2.clone());

    // The newer fetch resolves first, then the older one straggles in.
    assert!(state.apply_success(seq2, vec![row("2", "New")], 7));
    assert!(!state.apply_success(seq1, vec![row("1", "Old")], 99));

    assert_eq!(state.items, vec![row("2", "New")]);
    assert_eq!(state.total, 7);
    assert_eq!(state.query, q2);
    assert_eq!(state.status, ListStatus::Success);
}

#[test]
fn stale_failure_is_discarded() {
    let mut state = ListState::<Row>::default();
    let seq1 = state.begin_fetch(ListQuery::first_page(10));
    let seq2 = state.begin_fetch(state.query.with_page(2));

    assert!(state.apply_success(seq2, vec![row("2", "New")], 2));
    assert!(!state.apply_failure(seq1, ApiError::Network("late timeout".to_owned())));

    assert_eq!(state.status, ListStatus::Success);
    assert!(state.error.is_none());
}

#[test]
fn failure_retains_last_good_items_and_total() {
    let mut state = ListState::<Row>::default();
    let seq = state.begin_fetch(ListQuery::first_page(10));
    assert!(state.apply_success(seq, vec![row("a", "A"), row("b", "B")], 2));

    let seq = state.begin_fetch(state.query.with_page(2));
    assert!(state.apply_failure(seq, ApiError::Server { status: 500, message: "boom".to_owned() }));

    assert_eq!(state.status, ListStatus::Error);
    assert_eq!(state.items, vec![row("a", "A"), row("b", "B")]);
    assert_eq!(state.total, 2);
    assert_eq!(state.error.as_ref().map(ApiError::kind), Some(ApiErrorKind::Server));
}

#[test]
fn success_after_failure_clears_error() {
    let mut state = ListState::<Row>::default();
    let seq = state.begin_fetch(ListQuery::first_page(10));
    assert!(state.apply_failure(seq, ApiError::Network("offline".to_owned())));

    let seq = state.begin_fetch(state.query.clone());
    assert!(state.apply_success(seq, vec![row("1", "X")], 1));
    assert!(state.error.is_none());
    assert_eq!(state.status, ListStatus::Success);
}

// =============================================================
// Search debounce
// =============================================================

#[test]
fn rapid_search_edits_collapse_to_final_value() {
    let mut state = ListState::<Row>::default();
    let base = ListQuery::first_page(10);

    let g1 = state.begin_search_edit(base.with_search("a"));
    let g2 = state.begin_search_edit(base.with_search("ab"));
    let g3 = state.begin_search_edit(base.with_search("abc"));

    // Only the newest generation yields a query to fetch.
    assert_eq!(state.debounced_query(g1), None);
    assert_eq!(state.debounced_query(g2), None);
    let winner = state.debounced_query(g3).expect("newest edit survives");
    assert_eq!(winner.search, "abc");
}

#[test]
fn search_edit_sets_loading_and_newest_query() {
    let mut state = ListState::<Row>::default();
    state.begin_search_edit(ListQuery::first_page(10).with_search("jazz"));
    assert_eq!(state.status, ListStatus::Loading);
    assert_eq!(state.query.search, "jazz");
}

#[test]
fn debounced_query_is_taken_once() {
    let mut state = ListState::<Row>::default();
    let generation = state.begin_search_edit(ListQuery::first_page(10).with_search("x"));
    assert!(state.debounced_query(generation).is_some());
    assert_eq!(state.debounced_query(generation), None);
}

#[test]
fn immediate_fetch_abandons_pending_search_edit() {
    let mut state = ListState::<Row>::default();
    let generation = state.begin_search_edit(ListQuery::first_page(10).with_search("x"));

    // A page click fires immediately while the edit is still waiting.
    let seq = state.begin_fetch(state.query.with_page(2));
    assert_eq!(state.debounced_query(generation), None);

    assert!(state.apply_success(seq, vec![row("1", "X")], 1));
    assert_eq!(state.status, ListStatus::Success);
}
