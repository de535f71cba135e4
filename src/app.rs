//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, discover::DiscoverPage, login::LoginPage, orders::OrdersPage,
    pricing::PricingPage,
};
use crate::state::auth::AuthState;
use crate::util::session::CredentialProvider;

/// Root application component.
///
/// Provides the shared auth and session contexts, resolves the current user
/// once on startup, and sets up client-side routing. Favorites state is
/// page-owned; pages that need it create and load their own instance.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(CredentialProvider::from_storage());
    let auth = RwSignal::new(AuthState { user: None, loading: true });

    provide_context(session);
    provide_context(auth);

    // Resolve the current user once; pages react through the auth signal.
    #[cfg(feature = "hydrate")]
    {
        let credentials = session.get_untracked();
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user(&credentials).await;
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/paradise-pay.css"/>
        <Title text="Paradise Pay"/>

        <Router>
            <nav class="top-nav">
                <a class="top-nav__brand" href="/">
                    "Paradise Pay"
                </a>
                <div class="top-nav__links">
                    <a href="/">"Discover"</a>
                    <a href="/pricing">"Pricing"</a>
                    <a href="/orders">"Orders"</a>
                    <a href="/dashboard">"Dashboard"</a>
                </div>
            </nav>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DiscoverPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("orders") view=OrdersPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("pricing") view=PricingPage/>
                </Routes>
            </main>
        </Router>
    }
}
