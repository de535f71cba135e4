//! Orders page: the signed-in user's ticket orders with status filter and
//! pagination.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::components::filter_bar::{FilterBar, ORDER_STATUSES};
use crate::components::order_row::OrderRow;
use crate::components::pagination::Pagination;
use crate::net::list_client::ListController;
use crate::net::types::Order;
use crate::state::auth::AuthState;
use crate::state::list::{ListQuery, ListState, ListStatus};
use crate::util::auth::install_unauth_redirect;
use crate::util::session::CredentialProvider;

const ORDERS_PAGE_SIZE: u32 = 10;

/// Orders page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<RwSignal<CredentialProvider>>();
    install_unauth_redirect(auth, use_navigate());

    let orders = RwSignal::new(ListState::<Order>::default());
    let controller = ListController::new(orders, move |query| {
        let credentials = session.get_untracked();
        async move { crate::net::api::fetch_orders(&credentials, &query).await }
    });

    controller.set_query(ListQuery::first_page(ORDERS_PAGE_SIZE));

    let filter_controller = controller.clone();
    let on_status = Callback::new(move |status: Option<String>| {
        let query = filter_controller
            .state()
            .with_untracked(|s| s.query.with_filter("status", status.as_deref()));
        filter_controller.set_query(query);
    });

    let page_controller = controller.clone();
    let on_page = Callback::new(move |page: u32| {
        let query = page_controller.state().with_untracked(|s| s.query.with_page(page));
        page_controller.set_query(query);
    });

    let retry_controller = controller.clone();
    let on_retry = Callback::new(move |()| retry_controller.refresh());

    let selected_status =
        Memo::new(move |_| orders.with(|s| s.query.filters.get("status").cloned()));

    view! {
        <div class="orders-page">
            <header class="orders-page__header">
                <h1>"Your orders"</h1>
                <FilterBar options=ORDER_STATUSES selected=selected_status on_select=on_status/>
            </header>

            <ErrorBanner
                error=Signal::derive(move || orders.with(|s| s.error.clone()))
                on_retry=on_retry
            />

            <Show when=move || orders.with(|s| s.status == ListStatus::Loading)>
                <p class="orders-page__loading">"Loading orders..."</p>
            </Show>

            <Show when=move || orders.with(|s| s.items.is_empty() && s.status == ListStatus::Success)>
                <p class="orders-page__empty">"No orders yet."</p>
            </Show>

            <ul class="orders-page__list">
                {move || {
                    orders
                        .with(|s| s.items.clone())
                        .into_iter()
                        .map(|order| view! { <OrderRow order=order/> })
                        .collect::<Vec<_>>()
                }}
            </ul>

            <Pagination
                page=Memo::new(move |_| orders.with(|s| s.query.page))
                total=Memo::new(move |_| orders.with(|s| s.total))
                page_size=Memo::new(move |_| orders.with(|s| s.query.page_size))
                on_page=on_page
            />
        </div>
    }
}
