//! Search input for list pages.
//!
//! Emits raw keystrokes; debouncing happens in the list controller so every
//! consumer gets identical collapse behavior.

use leptos::prelude::*;

/// Free-text search box.
#[component]
pub fn SearchBar(
    #[prop(into)] placeholder: String,
    on_search: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                class="search-bar__input"
                type="search"
                placeholder=placeholder
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
        </div>
    }
}
