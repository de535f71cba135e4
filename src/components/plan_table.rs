//! Tiered plan comparison table for the pricing page.

#[cfg(test)]
#[path = "plan_table_test.rs"]
mod plan_table_test;

use leptos::prelude::*;

use crate::state::pricing::{BillingInterval, FeatureAvailability, feature_matrix, plans};
use crate::util::money::format_cents;

/// Cell text for one feature/tier intersection.
fn availability_text(availability: FeatureAvailability) -> &'static str {
    match availability {
        FeatureAvailability::Included => "\u{2713}",
        FeatureAvailability::Excluded => "\u{2014}",
        FeatureAvailability::Limit(limit) => limit,
    }
}

/// Price line for a plan at the selected interval.
fn price_line(monthly_equivalent_cents: u32) -> String {
    if monthly_equivalent_cents == 0 {
        "Free".to_owned()
    } else {
        format!("{}/mo", format_cents(monthly_equivalent_cents))
    }
}

/// Plan cards plus the feature-comparison matrix, driven by the
/// monthly/yearly toggle.
#[component]
pub fn PlanTable(#[prop(into)] interval: Signal<BillingInterval>) -> impl IntoView {
    view! {
        <div class="plan-table">
            <div class="plan-table__cards">
                {plans()
                    .into_iter()
                    .map(|plan| {
                        view! {
                            <div class="plan-card">
                                <h3 class="plan-card__name">{plan.name}</h3>
                                <p class="plan-card__price">
                                    {move || price_line(plan.price_cents(interval.get()))}
                                </p>
                                <Show when=move || {
                                    interval.get() == BillingInterval::Yearly
                                        && plan.yearly_discount_percent() > 0
                                }>
                                    <p class="plan-card__discount">
                                        {format!("Save {}%", plan.yearly_discount_percent())}
                                    </p>
                                </Show>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <table class="plan-table__matrix">
                <thead>
                    <tr>
                        <th></th>
                        {plans()
                            .into_iter()
                            .map(|plan| view! { <th>{plan.name}</th> })
                            .collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    {feature_matrix()
                        .into_iter()
                        .map(|feature| {
                            view! {
                                <tr>
                                    <td class="plan-table__feature">{feature.label}</td>
                                    {feature
                                        .availability
                                        .into_iter()
                                        .map(|availability| {
                                            view! { <td>{availability_text(availability)}</td> }
                                        })
                                        .collect::<Vec<_>>()}
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
