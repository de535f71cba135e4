use super::*;

fn state_with(members: &[&str]) -> FavoritesState {
    let mut state = FavoritesState::default();
    state.sync(members.iter().map(|id| (*id).to_owned()));
    state
}

// =============================================================
// Toggle lifecycle
// =============================================================

#[test]
fn add_toggle_flips_in_and_marks_pending() {
    let mut state = FavoritesState::default();
    let action = state.begin_toggle("e1", true);
    assert_eq!(action, ToggleAction::Add);
    assert!(state.is_member("e1"));
    assert!(state.is_pending("e1"));
}

#[test]
fn add_success_leaves_member_and_clears_pending() {
    let mut state = FavoritesState::default();
    let action = state.begin_toggle("e1", true);
    state.settle_toggle("e1", action, true);
    assert!(state.is_member("e1"));
    assert!(!state.is_pending("e1"));
    assert!(state.pending.is_empty());
}

#[test]
fn remove_toggle_flips_out_and_issues_remove() {
    let mut state = state_with(&["e1"]);
    let action = state.begin_toggle("e1", true);
    assert_eq!(action, ToggleAction::Remove);
    assert!(!state.is_member("e1"));
    assert!(state.is_pending("e1"));
}

#[test]
fn add_failure_reverts_to_non_member() {
    let mut state = FavoritesState::default();
    let action = state.begin_toggle("e1", true);
    state.settle_toggle("e1", action, false);
    assert!(!state.is_member("e1"));
    assert!(!state.is_pending("e1"));
}

#[test]
fn remove_failure_reverts_to_member() {
    let mut state = state_with(&["e1"]);
    let action = state.begin_toggle("e1", true);
    state.settle_toggle("e1", action, false);
    assert!(state.is_member("e1"));
    assert!(!state.is_pending("e1"));
}

// =============================================================
// Per-id serialization
// =============================================================

#[test]
fn second_toggle_while_pending_is_noop() {
    let mut state = FavoritesState::default();
    let first = state.begin_toggle("e1", true);
    assert_eq!(first, ToggleAction::Add);

    let second = state.begin_toggle("e1", true);
    assert_eq!(second, ToggleAction::AlreadyPending);
    // The optimistic flip from the first toggle is untouched.
    assert!(state.is_member("e1"));
    assert!(state.is_pending("e1"));
}

#[test]
fn distinct_ids_may_be_pending_concurrently() {
    let mut state = state_with(&["e2"]);
    assert_eq!(state.begin_toggle("e1", true), ToggleAction::Add);
    assert_eq!(state.begin_toggle("e2", true), ToggleAction::Remove);
    assert!(state.is_pending("e1"));
    assert!(state.is_pending("e2"));
}

#[test]
fn toggle_allowed_again_after_settle() {
    let mut state = FavoritesState::default();
    let action = state.begin_toggle("e1", true);
    state.settle_toggle("e1", action, true);
    assert_eq!(state.begin_toggle("e1", true), ToggleAction::Remove);
}

// =============================================================
// Unauthenticated short-circuit
// =============================================================

#[test]
fn unauthenticated_toggle_mutates_nothing() {
    let mut state = state_with(&["e2"]);
    let before = state.clone();
    let action = state.begin_toggle("e1", false);
    assert_eq!(action, ToggleAction::Unauthenticated);
    assert_eq!(state.members, before.members);
    assert_eq!(state.pending, before.pending);
}

// =============================================================
// Snapshot sync
// =============================================================

#[test]
fn fresh_instance_starts_unloaded() {
    // Each page constructs its own state at mount, so a fresh instance must
    // report unloaded and empty; the mount-time loader keys off `loaded`.
    let state = FavoritesState::default();
    assert!(!state.loaded);
    assert!(state.members.is_empty());
    assert!(state.pending.is_empty());
}

#[test]
fn sync_replaces_members_and_marks_loaded() {
    let mut state = FavoritesState::default();
    state.sync(vec!["a".to_owned(), "b".to_owned()]);
    assert!(state.loaded);
    assert!(state.is_member("a"));
    assert!(state.is_member("b"));
    assert!(!state.is_member("c"));
}

#[test]
fn sync_does_not_clobber_pending_add() {
    let mut state = FavoritesState::default();
    state.begin_toggle("e1", true);
    // A stale snapshot from before the toggle arrives.
    state.sync(vec!["other".to_owned()]);
    assert!(state.is_member("e1"));
    assert!(state.is_member("other"));
}

#[test]
fn sync_does_not_clobber_pending_remove() {
    let mut state = state_with(&["e1"]);
    state.begin_toggle("e1", true);
    state.sync(vec!["e1".to_owned(), "other".to_owned()]);
    assert!(!state.is_member("e1"));
    assert!(state.is_member("other"));
}
