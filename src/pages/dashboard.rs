//! User dashboard: account summary, favorites count, and recent orders.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::components::order_row::OrderRow;
use crate::net::favorites_client::install_favorites_loader;
use crate::net::list_client::ListController;
use crate::net::types::Order;
use crate::state::auth::AuthState;
use crate::state::favorites::FavoritesState;
use crate::state::list::{ListQuery, ListState, ListStatus};
use crate::util::session::CredentialProvider;

const RECENT_ORDERS_PAGE_SIZE: u32 = 5;

/// Dashboard page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<RwSignal<CredentialProvider>>();
    crate::util::auth::install_unauth_redirect(auth, use_navigate());

    // Page-owned favorites, loaded fresh on each mount.
    let favorites = RwSignal::new(FavoritesState::default());
    install_favorites_loader(auth, favorites, session);

    let recent = RwSignal::new(ListState::<Order>::default());
    let controller = ListController::new(recent, move |query| {
        let credentials = session.get_untracked();
        async move { crate::net::api::fetch_orders(&credentials, &query).await }
    });
    controller.set_query(ListQuery::first_page(RECENT_ORDERS_PAGE_SIZE));

    let retry_controller = controller.clone();
    let on_retry = Callback::new(move |()| retry_controller.refresh());

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let credentials = session.get_untracked();
            leptos::task::spawn_local(async move {
                crate::net::api::logout(&credentials).await;
                crate::util::session::clear_token();
                session.set(CredentialProvider::anonymous());
                auth.update(|a| {
                    a.user = None;
                    a.loading = false;
                });
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            });
        }
    };

    let greeting = move || {
        auth.with(|a| a.user.as_ref().map_or_else(String::new, |u| format!("Welcome back, {}", u.name)))
    };
    let favorite_count = move || favorites.with(|f| f.members.len());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
                <button class="btn" on:click=on_logout>
                    "Sign out"
                </button>
            </header>

            <section class="dashboard-page__stats">
                <a class="stat-card" href="/">
                    <span class="stat-card__value">{favorite_count}</span>
                    <span class="stat-card__label">"Favorited events"</span>
                </a>
                <a class="stat-card" href="/orders">
                    <span class="stat-card__value">{move || recent.with(|s| s.total)}</span>
                    <span class="stat-card__label">"Orders"</span>
                </a>
            </section>

            <section class="dashboard-page__orders">
                <h2>"Recent orders"</h2>
                <ErrorBanner
                    error=Signal::derive(move || recent.with(|s| s.error.clone()))
                    on_retry=on_retry
                />
                <Show when=move || recent.with(|s| s.status == ListStatus::Loading)>
                    <p class="dashboard-page__loading">"Loading orders..."</p>
                </Show>
                <ul class="dashboard-page__list">
                    {move || {
                        recent
                            .with(|s| s.items.clone())
                            .into_iter()
                            .map(|order| view! { <OrderRow order=order/> })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <a class="dashboard-page__all" href="/orders">
                    "View all orders"
                </a>
            </section>
        </div>
    }
}
