//! Plan and billing-interval logic for the pricing page.
//!
//! Prices are static marketing data; checkout itself belongs to the backend.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

/// Billing interval selected by the pricing toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingInterval {
    #[default]
    Monthly,
    Yearly,
}

impl BillingInterval {
    /// The other interval.
    pub fn toggled(self) -> Self {
        match self {
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Monthly,
        }
    }
}

/// Paradise Pay subscription tiers, cheapest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanTier {
    Starter,
    Organizer,
    Venue,
}

/// One subscription plan with both interval prices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub tier: PlanTier,
    pub name: &'static str,
    /// Price per month when billed monthly, in cents.
    pub monthly_cents: u32,
    /// Price per month when billed yearly, in cents.
    pub yearly_cents: u32,
}

impl Plan {
    /// The per-month price for the selected interval, in cents.
    pub fn price_cents(&self, interval: BillingInterval) -> u32 {
        match interval {
            BillingInterval::Monthly => self.monthly_cents,
            BillingInterval::Yearly => self.yearly_cents,
        }
    }

    /// Whole-percent saving of yearly billing over monthly billing.
    pub fn yearly_discount_percent(&self) -> u32 {
        if self.monthly_cents == 0 {
            return 0;
        }
        let saved = self.monthly_cents.saturating_sub(self.yearly_cents);
        saved * 100 / self.monthly_cents
    }
}

/// All plans, cheapest first. Order matches the feature matrix columns.
pub fn plans() -> [Plan; 3] {
    [
        Plan { tier: PlanTier::Starter, name: "Starter", monthly_cents: 0, yearly_cents: 0 },
        Plan { tier: PlanTier::Organizer, name: "Organizer", monthly_cents: 2900, yearly_cents: 2400 },
        Plan { tier: PlanTier::Venue, name: "Venue", monthly_cents: 9900, yearly_cents: 7900 },
    ]
}

/// How a feature is offered on one tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureAvailability {
    Included,
    Excluded,
    /// Included with a cap, e.g. `"3 events"`.
    Limit(&'static str),
}

/// One row of the tiered feature-comparison table. Availability columns are
/// in `plans()` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanFeature {
    pub label: &'static str,
    pub availability: [FeatureAvailability; 3],
}

/// Feature-comparison rows for the pricing page.
pub fn feature_matrix() -> Vec<PlanFeature> {
    use FeatureAvailability::{Excluded, Included, Limit};
    vec![
        PlanFeature {
            label: "Published events",
            availability: [Limit("3 events"), Limit("25 events"), Included],
        },
        PlanFeature {
            label: "Ticket sales",
            availability: [Included, Included, Included],
        },
        PlanFeature {
            label: "Attendee favorites & reminders",
            availability: [Included, Included, Included],
        },
        PlanFeature {
            label: "Custom branding",
            availability: [Excluded, Included, Included],
        },
        PlanFeature {
            label: "Reserved seating maps",
            availability: [Excluded, Excluded, Included],
        },
        PlanFeature {
            label: "Payout schedule",
            availability: [Limit("weekly"), Limit("daily"), Limit("daily")],
        },
        PlanFeature {
            label: "Admin dashboard seats",
            availability: [Limit("1 seat"), Limit("5 seats"), Included],
        },
    ]
}
