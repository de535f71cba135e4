use super::*;

#[test]
fn format_cents_pads_fractional_part() {
    assert_eq!(format_cents(4500), "$45.00");
    assert_eq!(format_cents(105), "$1.05");
    assert_eq!(format_cents(7), "$0.07");
}

#[test]
fn format_price_zero_is_free() {
    assert_eq!(format_price(0), "Free");
}

#[test]
fn format_price_nonzero_shows_from_amount() {
    assert_eq!(format_price(2599), "From $25.99");
}
