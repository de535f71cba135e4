//! Optimistic favorites membership with rollback.
//!
//! DESIGN
//! ======
//! Toggling a favorite flips local membership immediately, records the id as
//! pending, and the driver in `net::favorites_client` issues the matching
//! add/remove request. Success just clears pending; failure clears pending
//! and reverts the flip. At most one request per id is in flight at a time;
//! toggles on distinct ids may overlap freely. The backend remains the
//! source of truth: this state is a read-through, write-through cache that
//! lives only as long as the owning page.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use std::collections::HashSet;

/// Local view of the signed-in user's favorite event ids.
#[derive(Clone, Debug, Default)]
pub struct FavoritesState {
    /// Ids currently shown as favorited.
    pub members: HashSet<String>,
    /// Ids whose server confirmation has not yet arrived.
    pub pending: HashSet<String>,
    /// Whether a server snapshot has been loaded this session.
    pub loaded: bool,
}

/// What a toggle request decided to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    /// The id was flipped in; issue the add request.
    Add,
    /// The id was flipped out; issue the remove request.
    Remove,
    /// A request for this id is already in flight; nothing changed.
    AlreadyPending,
    /// No active session; nothing changed, caller should redirect to sign-in.
    Unauthenticated,
}

impl FavoritesState {
    /// Replace `members` from a server snapshot.
    ///
    /// Ids with an in-flight toggle keep their local (optimistic) value so a
    /// re-sync cannot clobber a toggle that has not settled yet.
    pub fn sync(&mut self, ids: impl IntoIterator<Item = String>) {
        let mut next: HashSet<String> = ids.into_iter().collect();
        for id in &self.pending {
            if self.members.contains(id) {
                next.insert(id.clone());
            } else {
                next.remove(id);
            }
        }
        self.members = next;
        self.loaded = true;
    }

    /// Start a toggle for `id`, applying the optimistic flip.
    ///
    /// The unauthenticated check runs before any mutation; a pending id is a
    /// no-op so each id has at most one outstanding request.
    pub fn begin_toggle(&mut self, id: &str, authenticated: bool) -> ToggleAction {
        if !authenticated {
            return ToggleAction::Unauthenticated;
        }
        if self.pending.contains(id) {
            return ToggleAction::AlreadyPending;
        }
        self.pending.insert(id.to_owned());
        if self.members.remove(id) {
            ToggleAction::Remove
        } else {
            self.members.insert(id.to_owned());
            ToggleAction::Add
        }
    }

    /// Settle the toggle started by `begin_toggle`. On success the flip
    /// stands; on failure it is reverted. Either way the id stops pending.
    pub fn settle_toggle(&mut self, id: &str, action: ToggleAction, ok: bool) {
        self.pending.remove(id);
        if ok {
            return;
        }
        match action {
            ToggleAction::Add => {
                self.members.remove(id);
            }
            ToggleAction::Remove => {
                self.members.insert(id.to_owned());
            }
            ToggleAction::AlreadyPending | ToggleAction::Unauthenticated => {}
        }
    }

    /// Whether `id` is currently shown as favorited.
    pub fn is_member(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    /// Whether a toggle for `id` is awaiting server confirmation.
    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains(id)
    }
}
