use super::*;

#[test]
fn interval_toggles_both_ways() {
    assert_eq!(BillingInterval::Monthly.toggled(), BillingInterval::Yearly);
    assert_eq!(BillingInterval::Yearly.toggled(), BillingInterval::Monthly);
    assert_eq!(BillingInterval::default(), BillingInterval::Monthly);
}

#[test]
fn price_follows_selected_interval() {
    let plan = Plan { tier: PlanTier::Organizer, name: "Organizer", monthly_cents: 2900, yearly_cents: 2400 };
    assert_eq!(plan.price_cents(BillingInterval::Monthly), 2900);
    assert_eq!(plan.price_cents(BillingInterval::Yearly), 2400);
}

#[test]
fn yearly_discount_is_whole_percent() {
    let plan = Plan { tier: PlanTier::Venue, name: "Venue", monthly_cents: 9900, yearly_cents: 7900 };
    // 2000 / 9900 = 20.2% -> 20
    assert_eq!(plan.yearly_discount_percent(), 20);
}

#[test]
fn free_plan_has_no_discount() {
    let plan = Plan { tier: PlanTier::Starter, name: "Starter", monthly_cents: 0, yearly_cents: 0 };
    assert_eq!(plan.yearly_discount_percent(), 0);
}

#[test]
fn plans_are_cheapest_first() {
    let all = plans();
    assert_eq!(all.len(), 3);
    assert!(all[0].monthly_cents <= all[1].monthly_cents);
    assert!(all[1].monthly_cents <= all[2].monthly_cents);
}

#[test]
fn yearly_never_costs_more_than_monthly() {
    for plan in plans() {
        assert!(plan.yearly_cents <= plan.monthly_cents, "{}", plan.name);
    }
}

#[test]
fn feature_matrix_columns_match_plan_count() {
    let rows = feature_matrix();
    assert!(!rows.is_empty());
    for row in rows {
        assert_eq!(row.availability.len(), plans().len());
    }
}
