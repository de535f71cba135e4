//! Async driver for optimistic favorite toggles and snapshot loading.
//!
//! SYSTEM CONTEXT
//! ==============
//! `toggle_favorite` applies the optimistic flip synchronously, issues the
//! matching add/remove request, and settles (or reverts) the state when the
//! request resolves. Failures are logged and reverted, never thrown into the
//! render path. The caller handles the `Unauthenticated` outcome by
//! redirecting to sign-in.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::favorites::{FavoritesState, ToggleAction};
use crate::util::session::CredentialProvider;

/// Toggle membership of `event_id` in the user's favorites.
///
/// Returns the action taken so the caller can react to
/// `ToggleAction::Unauthenticated`; every other outcome is handled here.
pub fn toggle_favorite(
    auth: RwSignal<AuthState>,
    favorites: RwSignal<FavoritesState>,
    session: RwSignal<CredentialProvider>,
    event_id: &str,
) -> ToggleAction {
    let authenticated = auth.with_untracked(AuthState::is_authenticated);
    let mut action = ToggleAction::Unauthenticated;
    favorites.update(|f| action = f.begin_toggle(event_id, authenticated));

    match action {
        ToggleAction::Add | ToggleAction::Remove => {
            spawn_toggle_request(favorites, session, event_id.to_owned(), action);
        }
        ToggleAction::AlreadyPending | ToggleAction::Unauthenticated => {}
    }
    action
}

#[cfg(feature = "hydrate")]
fn spawn_toggle_request(
    favorites: RwSignal<FavoritesState>,
    session: RwSignal<CredentialProvider>,
    event_id: String,
    action: ToggleAction,
) {
    let credentials = session.get_untracked();
    leptos::task::spawn_local(async move {
        let result = match action {
            ToggleAction::Add => crate::net::api::add_favorite(&credentials, &event_id).await,
            ToggleAction::Remove => crate::net::api::remove_favorite(&credentials, &event_id).await,
            ToggleAction::AlreadyPending | ToggleAction::Unauthenticated => return,
        };
        if let Err(error) = &result {
            leptos::logging::warn!("favorite toggle failed for {event_id}: {error}");
        }
        favorites.update(|f| f.settle_toggle(&event_id, action, result.is_ok()));
    });
}

#[cfg(not(feature = "hydrate"))]
fn spawn_toggle_request(
    favorites: RwSignal<FavoritesState>,
    session: RwSignal<CredentialProvider>,
    event_id: String,
    action: ToggleAction,
) {
    // No network on the server; settle as failed so the flip reverts.
    let _ = session;
    favorites.update(|f| f.settle_toggle(&event_id, action, false));
}

/// Load the favorites snapshot once auth resolves to a signed-in user.
///
/// Each page owns its `favorites` signal, so the snapshot is fetched fresh on
/// every mount; the `loaded` flag only keeps this instance's effect from
/// re-fetching when auth re-fires.
pub fn install_favorites_loader(
    auth: RwSignal<AuthState>,
    favorites: RwSignal<FavoritesState>,
    session: RwSignal<CredentialProvider>,
) {
    Effect::new(move || {
        let signed_in = auth.with(|a| !a.loading && a.user.is_some());
        let loaded = favorites.with_untracked(|f| f.loaded);
        if !signed_in || loaded {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let credentials = session.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_favorites(&credentials).await {
                    Ok(ids) => favorites.update(|f| f.sync(ids)),
                    Err(error) => leptos::logging::warn!("favorites load failed: {error}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    });
}
