//! Discover page: searchable, filterable, paginated event grid with
//! optimistic favorite toggles.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::components::event_card::EventCard;
use crate::components::filter_bar::{EVENT_CATEGORIES, FilterBar};
use crate::components::pagination::Pagination;
use crate::components::search_bar::SearchBar;
use crate::net::favorites_client::{install_favorites_loader, toggle_favorite};
use crate::net::list_client::ListController;
use crate::net::types::EventSummary;
use crate::state::auth::AuthState;
use crate::state::favorites::{FavoritesState, ToggleAction};
use crate::state::list::{ListQuery, ListState, ListStatus};
use crate::util::session::CredentialProvider;

const EVENTS_PAGE_SIZE: u32 = 12;

/// Discover page — the public event catalog.
///
/// Favoriting while signed out redirects to `/login` without touching local
/// state.
#[component]
pub fn DiscoverPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<RwSignal<CredentialProvider>>();
    let navigate = use_navigate();

    // Page-owned favorites: a fresh snapshot is loaded on every mount and the
    // state is dropped with the page.
    let favorites = RwSignal::new(FavoritesState::default());

    let events = RwSignal::new(ListState::<EventSummary>::default());
    let controller = ListController::new(events, move |query| {
        let credentials = session.get_untracked();
        async move { crate::net::api::fetch_events(&credentials, &query).await }
    });

    install_favorites_loader(auth, favorites, session);
    controller.set_query(ListQuery::first_page(EVENTS_PAGE_SIZE));

    let search_controller = controller.clone();
    let on_search = Callback::new(move |text: String| {
        let query = search_controller
            .state()
            .with_untracked(|s| s.query.with_search(&text));
        search_controller.set_query(query);
    });

    let filter_controller = controller.clone();
    let on_category = Callback::new(move |category: Option<String>| {
        let query = filter_controller
            .state()
            .with_untracked(|s| s.query.with_filter("category", category.as_deref()));
        filter_controller.set_query(query);
    });

    let page_controller = controller.clone();
    let on_page = Callback::new(move |page: u32| {
        let query = page_controller.state().with_untracked(|s| s.query.with_page(page));
        page_controller.set_query(query);
    });

    let retry_controller = controller.clone();
    let on_retry = Callback::new(move |()| retry_controller.refresh());

    let on_toggle = Callback::new(move |event_id: String| {
        if toggle_favorite(auth, favorites, session, &event_id) == ToggleAction::Unauthenticated {
            navigate("/login", NavigateOptions::default());
        }
    });

    let selected_category =
        Memo::new(move |_| events.with(|s| s.query.filters.get("category").cloned()));

    view! {
        <div class="discover-page">
            <header class="discover-page__header">
                <h1>"Discover events"</h1>
                <SearchBar placeholder="Search events, venues, cities..." on_search=on_search/>
                <FilterBar
                    options=EVENT_CATEGORIES
                    selected=selected_category
                    on_select=on_category
                />
            </header>

            <ErrorBanner
                error=Signal::derive(move || events.with(|s| s.error.clone()))
                on_retry=on_retry
            />

            <Show when=move || events.with(|s| s.status == ListStatus::Loading)>
                <p class="discover-page__loading">"Loading events..."</p>
            </Show>

            <Show when=move || {
                events.with(|s| s.items.is_empty() && s.status == ListStatus::Success)
            }>
                <p class="discover-page__empty">"No events match your search."</p>
            </Show>

            <div class="discover-page__grid">
                {move || {
                    events
                        .with(|s| s.items.clone())
                        .into_iter()
                        .map(|event| {
                            let id_for_member = event.id.clone();
                            let id_for_pending = event.id.clone();
                            view! {
                                <EventCard
                                    event=event
                                    favorited=Signal::derive(move || {
                                        favorites.with(|f| f.is_member(&id_for_member))
                                    })
                                    pending=Signal::derive(move || {
                                        favorites.with(|f| f.is_pending(&id_for_pending))
                                    })
                                    on_toggle=on_toggle
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Pagination
                page=Memo::new(move |_| events.with(|s| s.query.page))
                total=Memo::new(move |_| events.with(|s| s.total))
                page_size=Memo::new(move |_| events.with(|s| s.query.page_size))
                on_page=on_page
            />
        </div>
    }
}
