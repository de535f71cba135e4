//! Filter chip row for list pages.

use leptos::prelude::*;

/// Event category slugs offered on the Discover page.
pub const EVENT_CATEGORIES: &[&str] = &["music", "sports", "arts", "food", "tech"];

/// Order status slugs offered on the Orders page.
pub const ORDER_STATUSES: &[&str] = &["paid", "pending", "refunded"];

/// Single-select chip row. Selecting the active chip clears the filter.
#[component]
pub fn FilterBar(
    options: &'static [&'static str],
    #[prop(into)] selected: Signal<Option<String>>,
    on_select: Callback<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <button
                class="filter-bar__chip"
                class:filter-bar__chip--active=move || selected.get().is_none()
                on:click=move |_| on_select.run(None)
            >
                "All"
            </button>
            {options
                .iter()
                .map(|option| {
                    let value = (*option).to_owned();
                    let chip_value = value.clone();
                    view! {
                        <button
                            class="filter-bar__chip"
                            class:filter-bar__chip--active=move || {
                                selected.get().as_deref() == Some(chip_value.as_str())
                            }
                            on:click=move |_| {
                                let next = if selected.get().as_deref() == Some(value.as_str()) {
                                    None
                                } else {
                                    Some(value.clone())
                                };
                                on_select.run(next);
                            }
                        >
                            {*option}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
