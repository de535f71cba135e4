//! Pager row shown under paginated lists.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// Number of pages needed to show `total` rows at `page_size` per page.
pub fn page_count(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Whether a previous page exists.
pub fn has_prev(page: u32) -> bool {
    page > 1
}

/// Whether a next page exists.
pub fn has_next(page: u32, pages: u32) -> bool {
    page < pages
}

/// Prev/next pager with a position label. Hidden when one page suffices.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total: Signal<u64>,
    #[prop(into)] page_size: Signal<u32>,
    on_page: Callback<u32>,
) -> impl IntoView {
    let pages = move || page_count(total.get(), page_size.get());

    view! {
        <Show when=move || { pages() > 1 }>
            <nav class="pagination">
                <button
                    class="pagination__button"
                    disabled=move || !has_prev(page.get())
                    on:click=move |_| on_page.run(page.get().saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <span class="pagination__label">
                    {move || format!("Page {} of {}", page.get(), pages())}
                </span>
                <button
                    class="pagination__button"
                    disabled=move || !has_next(page.get(), pages())
                    on:click=move |_| on_page.run(page.get() + 1)
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
