use super::*;

#[test]
fn availability_text_per_variant() {
    assert_eq!(availability_text(FeatureAvailability::Included), "\u{2713}");
    assert_eq!(availability_text(FeatureAvailability::Excluded), "\u{2014}");
    assert_eq!(availability_text(FeatureAvailability::Limit("3 events")), "3 events");
}

#[test]
fn price_line_free_and_paid() {
    assert_eq!(price_line(0), "Free");
    assert_eq!(price_line(2400), "$24.00/mo");
}
