//! Unobtrusive error banner shown above stale list data.
//!
//! List pages keep their last good rows on screen when a fetch fails; this
//! banner sits above them with a retry affordance instead of blanking the
//! page.

use leptos::prelude::*;

use crate::net::error::ApiError;

/// Error banner with an optional retry button. Renders nothing while the
/// error signal is empty.
#[component]
pub fn ErrorBanner(
    #[prop(into)] error: Signal<Option<ApiError>>,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-banner" role="alert">
                <span class="error-banner__message">
                    {move || error.get().map(|e| e.to_string()).unwrap_or_default()}
                </span>
                <button class="error-banner__retry" on:click=move |_| on_retry.run(())>
                    "Retry"
                </button>
            </div>
        </Show>
    }
}
