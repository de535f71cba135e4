//! Event card for the Discover grid, with a favorite toggle button.

#[cfg(test)]
#[path = "event_card_test.rs"]
mod event_card_test;

use leptos::prelude::*;

use crate::net::types::EventSummary;
use crate::util::money::format_price;

/// Accessible label for the favorite button in its current state.
fn favorite_label(favorited: bool) -> &'static str {
    if favorited { "Remove from favorites" } else { "Add to favorites" }
}

/// Visual glyph for the favorite button.
fn favorite_glyph(favorited: bool) -> &'static str {
    if favorited { "\u{2665}" } else { "\u{2661}" }
}

/// One event in the Discover grid.
///
/// The favorite button is disabled while the toggle for this event awaits
/// server confirmation, matching the per-id request serialization.
#[component]
pub fn EventCard(
    event: EventSummary,
    #[prop(into)] favorited: Signal<bool>,
    #[prop(into)] pending: Signal<bool>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    let price = format_price(event.price_cents);
    let event_id = event.id.clone();
    let sold_out = event.sold_out;

    view! {
        <article class="event-card" class:event-card--sold-out=sold_out>
            <header class="event-card__header">
                <h3 class="event-card__name">{event.name}</h3>
                <button
                    class="event-card__favorite"
                    class:event-card__favorite--on=move || favorited.get()
                    disabled=move || pending.get()
                    aria-label=move || favorite_label(favorited.get())
                    on:click=move |_| on_toggle.run(event_id.clone())
                >
                    {move || favorite_glyph(favorited.get())}
                </button>
            </header>
            <p class="event-card__venue">{format!("{}, {}", event.venue, event.city)}</p>
            <p class="event-card__date">{event.starts_at}</p>
            <footer class="event-card__footer">
                <span class="event-card__price">{price}</span>
                <Show when=move || sold_out>
                    <span class="event-card__badge">"Sold out"</span>
                </Show>
            </footer>
        </article>
    }
}
