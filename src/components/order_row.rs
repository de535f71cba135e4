//! Order list row with an expandable ticket section.

#[cfg(test)]
#[path = "order_row_test.rs"]
mod order_row_test;

use leptos::prelude::*;

use crate::net::types::{Order, OrderStatus, Ticket};
use crate::util::money::format_cents;
use crate::util::session::CredentialProvider;

/// CSS modifier class for an order status badge.
fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Paid => "order-row__status--paid",
        OrderStatus::Pending => "order-row__status--pending",
        OrderStatus::Refunded => "order-row__status--refunded",
    }
}

/// Human label for an order status.
fn status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Paid => "Paid",
        OrderStatus::Pending => "Pending",
        OrderStatus::Refunded => "Refunded",
    }
}

/// One row on the Orders page. Expanding the row lazily fetches the order's
/// tickets; a load failure shows an inline note rather than clearing the row.
#[component]
pub fn OrderRow(order: Order) -> impl IntoView {
    let session = expect_context::<RwSignal<CredentialProvider>>();

    let expanded = RwSignal::new(false);
    let tickets = RwSignal::new(None::<Vec<Ticket>>);
    let tickets_error = RwSignal::new(false);

    let order_id = order.id.clone();
    let on_expand = move |_| {
        let next = !expanded.get();
        expanded.set(next);
        if !next || tickets.with(Option::is_some) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let credentials = session.get_untracked();
            let order_id = order_id.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_order_tickets(&credentials, &order_id).await {
                    Ok(list) => tickets.set(Some(list)),
                    Err(error) => {
                        leptos::logging::warn!("ticket load failed for {order_id}: {error}");
                        tickets_error.set(true);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &order_id);
        }
    };

    view! {
        <li class="order-row">
            <div class="order-row__summary" on:click=on_expand>
                <span class="order-row__event">{order.event_name.clone()}</span>
                <span class="order-row__quantity">{format!("{} tickets", order.quantity)}</span>
                <span class="order-row__total">{format_cents(order.total_cents)}</span>
                <span class=format!("order-row__status {}", status_class(order.status))>
                    {status_label(order.status)}
                </span>
                <span class="order-row__date">{order.created_at.clone()}</span>
            </div>
            <Show when=move || expanded.get()>
                <div class="order-row__tickets">
                    {move || match tickets.get() {
                        Some(list) if list.is_empty() => {
                            view! { <p class="order-row__note">"No tickets issued yet."</p> }.into_any()
                        }
                        Some(list) => view! {
                            <ul class="ticket-list">
                                {list
                                    .into_iter()
                                    .map(|ticket| {
                                        let seat = ticket.seat.unwrap_or_else(|| "General admission".to_owned());
                                        view! {
                                            <li class="ticket-list__item">
                                                <span class="ticket-list__code">{ticket.code}</span>
                                                <span class="ticket-list__seat">{seat}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                        .into_any(),
                        None if tickets_error.get() => {
                            view! { <p class="order-row__note">"Could not load tickets."</p> }.into_any()
                        }
                        None => view! { <p class="order-row__note">"Loading tickets..."</p> }.into_any(),
                    }}
                </div>
            </Show>
        </li>
    }
}
