//! Pricing page with the monthly/yearly billing toggle.

use leptos::prelude::*;

use crate::components::plan_table::PlanTable;
use crate::state::pricing::BillingInterval;

/// Pricing page — public marketing route.
#[component]
pub fn PricingPage() -> impl IntoView {
    let interval = RwSignal::new(BillingInterval::Monthly);

    view! {
        <div class="pricing-page">
            <header class="pricing-page__header">
                <h1>"Plans for every organizer"</h1>
                <div class="pricing-page__toggle" role="group">
                    <button
                        class="pricing-page__interval"
                        class:pricing-page__interval--active=move || {
                            interval.get() == BillingInterval::Monthly
                        }
                        on:click=move |_| interval.set(BillingInterval::Monthly)
                    >
                        "Monthly"
                    </button>
                    <button
                        class="pricing-page__interval"
                        class:pricing-page__interval--active=move || {
                            interval.get() == BillingInterval::Yearly
                        }
                        on:click=move |_| interval.set(BillingInterval::Yearly)
                    >
                        "Yearly"
                    </button>
                </div>
            </header>

            <PlanTable interval=interval/>
        </div>
    }
}
